use crate::consts::BOX_CIRCLE_EPSILON;
use crate::shape::{Aabb, Circle, Polygon, Shape};

pub mod sat;
mod segment;

pub use segment::closest_point_on_segment;

/// Overlap test between two shapes.
///
/// Implemented for every ordered pair of shape types, and both orders of a pair always agree.
pub trait Intersects<Rhs: ?Sized = Self> {
    fn intersects(&self, other: &Rhs) -> bool;
}

/// Checks whether `a` and `b` overlap, regardless of which shape types they are.
#[inline(always)]
pub fn intersect<A, B>(a: &A, b: &B) -> bool
where
    A: Intersects<B> + ?Sized,
    B: ?Sized,
{
    a.intersects(b)
}

impl Intersects for Aabb {
    /// Inclusive on both axes: boxes sharing an edge overlap.
    #[inline(always)]
    fn intersects(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min_bound(), self.max_bound());
        let (b_min, b_max) = (other.min_bound(), other.max_bound());
        if a_max.x < b_min.x || a_min.x > b_max.x {
            return false;
        }
        if a_max.y < b_min.y || a_min.y > b_max.y {
            return false;
        }
        true
    }
}

impl Intersects for Circle {
    /// Strict: tangent circles do not overlap.
    #[inline(always)]
    fn intersects(&self, other: &Circle) -> bool {
        let distance_sq = (self.centre() - other.centre()).square_magnitude();
        let radius_sum = self.radius() + other.radius();
        distance_sq < radius_sum * radius_sum
    }
}

impl Intersects for Polygon {
    fn intersects(&self, other: &Polygon) -> bool {
        sat::rings_intersect(self.vertices(), other.vertices())
    }
}

impl Intersects<Circle> for Aabb {
    /// Clamps the circle centre into the box and compares the squared distance,
    /// with [`BOX_CIRCLE_EPSILON`] of slack on the boundary.
    #[inline(always)]
    fn intersects(&self, circle: &Circle) -> bool {
        let closest = self.closest_point(circle.centre());
        let radius = circle.radius();
        (closest - circle.centre()).square_magnitude() <= radius * radius + BOX_CIRCLE_EPSILON
    }
}

impl Intersects<Aabb> for Circle {
    #[inline(always)]
    fn intersects(&self, aabb: &Aabb) -> bool {
        aabb.intersects(self)
    }
}

impl Intersects<Polygon> for Aabb {
    /// The box is treated as the convex ring of its corners.
    fn intersects(&self, polygon: &Polygon) -> bool {
        sat::rings_intersect(polygon.vertices(), &self.corners())
    }
}

impl Intersects<Aabb> for Polygon {
    fn intersects(&self, aabb: &Aabb) -> bool {
        aabb.intersects(self)
    }
}

impl Intersects<Polygon> for Circle {
    /// Overlap if a vertex lies in the circle, if an edge passes through it,
    /// or if the polygon encloses the circle centre.
    ///
    /// The enclosure check is intentional and goes beyond the vertex and edge tests:
    /// a circle lying entirely inside the polygon touches neither, yet overlaps it.
    fn intersects(&self, polygon: &Polygon) -> bool {
        if polygon.vertices().iter().any(|v| self.contains(*v)) {
            return true;
        }

        let centre = self.centre();
        if polygon
            .edges()
            .any(|(start, end)| self.contains(closest_point_on_segment(start, end, centre)))
        {
            return true;
        }

        polygon.contains(centre)
    }
}

impl Intersects<Circle> for Polygon {
    fn intersects(&self, circle: &Circle) -> bool {
        circle.intersects(self)
    }
}

impl Intersects for Shape {
    fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Aabb(a), Shape::Aabb(b)) => a.intersects(b),
            (Shape::Aabb(a), Shape::Circle(b)) => a.intersects(b),
            (Shape::Aabb(a), Shape::Polygon(b)) => a.intersects(b),
            (Shape::Circle(a), Shape::Aabb(b)) => a.intersects(b),
            (Shape::Circle(a), Shape::Circle(b)) => a.intersects(b),
            (Shape::Circle(a), Shape::Polygon(b)) => a.intersects(b),
            (Shape::Polygon(a), Shape::Aabb(b)) => a.intersects(b),
            (Shape::Polygon(a), Shape::Circle(b)) => a.intersects(b),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.intersects(b),
        }
    }
}
