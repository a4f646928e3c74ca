//! Separating Axis Theorem for convex rings.
//!
//! Two convex polygons are disjoint iff some edge normal of either one separates
//! their projections. Only exact for convex input.

use crate::math::Vec2;
use crate::util::assertions;
use itertools::Itertools;
use log::debug;

/// Checks whether two convex rings overlap. Touching rings overlap.
///
/// Non-convex input still yields a result, but not a meaningful one.
pub fn rings_intersect(ring_a: &[Vec2], ring_b: &[Vec2]) -> bool {
    if cfg!(debug_assertions) {
        let convex = [ring_a, ring_b].map(assertions::ring_is_convex);
        if convex.contains(&false) {
            debug!("[SHAPE] separating axis test on a non-convex ring, result is undefined");
        }
    }

    let separated = [ring_a, ring_b]
        .into_iter()
        .flat_map(|ring| ring.iter().copied().circular_tuple_windows())
        .map(|(start, end): (Vec2, Vec2)| (end - start).perpendicular())
        .any(|axis| {
            let (min_a, max_a) = project(ring_a, axis);
            let (min_b, max_b) = project(ring_b, axis);
            max_a < min_b || max_b < min_a
        });

    !separated
}

/// Interval `[min, max]` covered by the ring when projected onto `axis`
#[inline(always)]
fn project(ring: &[Vec2], axis: Vec2) -> (f32, f32) {
    ring.iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}
