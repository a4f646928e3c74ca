use crate::math::Vec2;
use crate::shape::{Bounded, Polygon, ShapeType};
use crate::util::assertions;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
///
/// Only the bounds are independent state: `centre`, `half_size_vec` and `half_size_length`
/// are recomputed on every mutation and never set on their own.
/// Callers are expected to keep `min_bound <= max_bound` on both axes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "AabbBounds", into = "AabbBounds")]
pub struct Aabb {
    min_bound: Vec2,
    max_bound: Vec2,
    centre: Vec2,
    half_size_vec: Vec2,
    half_size_length: f32,
}

impl Aabb {
    pub fn new(min_bound: Vec2, max_bound: Vec2) -> Self {
        let mut aabb = Self {
            min_bound,
            max_bound,
            ..Default::default()
        };
        aabb.refresh_derived();
        aabb
    }

    /// Box centred on `centre` extending `|half_size|` in each direction.
    pub fn from_centre_half_extents(centre: Vec2, half_size: Vec2) -> Self {
        let half_size = half_size.abs();
        Self::new(centre - half_size, centre + half_size)
    }

    pub fn from_centre_size(centre: Vec2, width: f32, height: f32) -> Self {
        Self::from_centre_half_extents(centre, Vec2::new(width / 2.0, height / 2.0))
    }

    #[inline(always)]
    pub fn min_bound(&self) -> Vec2 {
        self.min_bound
    }

    #[inline(always)]
    pub fn max_bound(&self) -> Vec2 {
        self.max_bound
    }

    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    pub fn half_size_vec(&self) -> Vec2 {
        self.half_size_vec
    }

    /// Distance from the centre to any corner
    pub fn half_size_length(&self) -> f32 {
        self.half_size_length
    }

    pub fn width(&self) -> f32 {
        self.max_bound.x - self.min_bound.x
    }

    pub fn height(&self) -> f32 {
        self.max_bound.y - self.min_bound.y
    }

    pub fn set_min_bound(&mut self, bound: Vec2) {
        self.min_bound = bound;
        self.refresh_derived();
    }

    pub fn set_max_bound(&mut self, bound: Vec2) {
        self.max_bound = bound;
        self.refresh_derived();
    }

    /// Inclusive on every edge
    #[inline(always)]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_bound.x
            && point.x <= self.max_bound.x
            && point.y >= self.min_bound.y
            && point.y <= self.max_bound.y
    }

    /// Point of the box closest to `point` (the point itself if it lies inside).
    #[inline(always)]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min_bound.x, self.max_bound.x),
            point.y.clamp(self.min_bound.y, self.max_bound.y),
        )
    }

    /// Corners as a closed ring: min, top-left, max, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min_bound,
            Vec2::new(self.min_bound.x, self.max_bound.y),
            self.max_bound,
            Vec2::new(self.max_bound.x, self.min_bound.y),
        ]
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }

    fn refresh_derived(&mut self) {
        self.centre = (self.min_bound + self.max_bound) * 0.5;
        self.half_size_vec = (self.max_bound - self.min_bound) * 0.5;
        self.half_size_length = self.half_size_vec.magnitude();
        debug_assert!(assertions::aabb_is_consistent(self));
    }
}

impl Bounded for Aabb {
    fn bounding_box(&self) -> Aabb {
        *self
    }

    fn update_position(&mut self, position: Vec2) {
        self.min_bound = position - self.half_size_vec;
        self.max_bound = position + self.half_size_vec;
        self.refresh_derived();
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Aabb
    }
}

impl PartialEq for Aabb {
    fn eq(&self, other: &Self) -> bool {
        self.min_bound == other.min_bound && self.max_bound == other.max_bound
    }
}

/// Serialized form of an [`Aabb`]: only the bounds, the rest is derived on load.
#[derive(Serialize, Deserialize)]
struct AabbBounds {
    min: Vec2,
    max: Vec2,
}

impl From<AabbBounds> for Aabb {
    fn from(b: AabbBounds) -> Self {
        Aabb::new(b.min, b.max)
    }
}

impl From<Aabb> for AabbBounds {
    fn from(a: Aabb) -> Self {
        AabbBounds {
            min: a.min_bound,
            max: a.max_bound,
        }
    }
}
