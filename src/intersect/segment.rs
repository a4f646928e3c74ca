use crate::math::Vec2;

/// Point of the segment `[start, end]` closest to `point`.
///
/// The projection parameter is clamped to `[0, 1]` so the result never leaves the segment.
/// A zero-length segment collapses to `start`.
#[inline(always)]
pub fn closest_point_on_segment(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let segment = end - start;
    let length_sq = segment.square_magnitude();
    if length_sq == 0.0 {
        return start;
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    start + segment * t
}
