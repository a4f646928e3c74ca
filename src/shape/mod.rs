use crate::math::Vec2;
use serde::{Deserialize, Serialize};

mod aabb;
mod circle;
mod polygon;

pub use aabb::Aabb;
pub use circle::Circle;
pub use polygon::Polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Aabb,
    Circle,
    Polygon,
}

/// Capabilities shared by every bounding shape.
pub trait Bounded {
    /// Tightest axis-aligned box containing the shape
    fn bounding_box(&self) -> Aabb;

    /// Moves the shape so that it is centred on `position`, keeping its size.
    fn update_position(&mut self, position: Vec2);

    fn shape_type(&self) -> ShapeType;
}

/// Closed set of bounding shapes, dispatched without dynamic dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Aabb(Aabb),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Point containment. Polygons are tested as convex rings.
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Aabb(a) => a.contains(point),
            Shape::Circle(c) => c.contains(point),
            Shape::Polygon(p) => p.contains(point),
        }
    }
}

impl Bounded for Shape {
    fn bounding_box(&self) -> Aabb {
        match self {
            Shape::Aabb(a) => a.bounding_box(),
            Shape::Circle(c) => c.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
        }
    }

    fn update_position(&mut self, position: Vec2) {
        match self {
            Shape::Aabb(a) => a.update_position(position),
            Shape::Circle(c) => c.update_position(position),
            Shape::Polygon(p) => p.update_position(position),
        }
    }

    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Aabb(_) => ShapeType::Aabb,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }
}

impl From<Aabb> for Shape {
    fn from(a: Aabb) -> Self {
        Shape::Aabb(a)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
