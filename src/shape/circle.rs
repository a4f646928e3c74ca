use crate::math::Vec2;
use crate::shape::{Aabb, Bounded, ShapeType};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    centre: Vec2,
    radius: f32,
}

impl Circle {
    pub fn new(centre: Vec2, radius: f32) -> Self {
        if radius < 0.0 {
            warn!(
                "[SHAPE] circle built with negative radius {}, intersection results are undefined",
                radius
            );
        }
        Self { centre, radius }
    }

    /// Circle of the given radius centred on the origin
    pub fn from_radius(radius: f32) -> Self {
        Self::new(Vec2::ZERO, radius)
    }

    #[inline(always)]
    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    #[inline(always)]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_centre(&mut self, centre: Vec2) {
        self.centre = centre;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Boundary inclusive, compared in squared space to avoid the square root.
    #[inline(always)]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.centre).square_magnitude() <= self.radius * self.radius
    }
}

impl Bounded for Circle {
    fn bounding_box(&self) -> Aabb {
        let r = Vec2::new(self.radius, self.radius);
        Aabb::new(self.centre - r, self.centre + r)
    }

    fn update_position(&mut self, position: Vec2) {
        self.centre = position;
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }
}
