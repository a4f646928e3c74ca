use crate::consts::MIN_POLYGON_VERTICES;
use crate::math::Vec2;
use crate::shape::{Aabb, Bounded, ShapeType};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// Closed ring of vertices: vertex `i` connects to vertex `(i + 1) % n`.
///
/// Intersection tests assume the ring is convex and has at least three vertices,
/// neither is checked in release builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        if vertices.len() < MIN_POLYGON_VERTICES {
            warn!(
                "[SHAPE] polygon built with {} vertices, intersection results are undefined",
                vertices.len()
            );
        }
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) {
        self.vertices = vertices;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All edges of the ring as `(start, end)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Point containment for a convex ring of either winding, boundary inclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.vertices.len() < MIN_POLYGON_VERTICES {
            return false;
        }
        let (mut any_pos, mut any_neg) = (false, false);
        for (start, end) in self.edges() {
            let side = (end - start).cross(point - start);
            any_pos |= side > 0.0;
            any_neg |= side < 0.0;
            if any_pos && any_neg {
                return false;
            }
        }
        true
    }
}

impl Bounded for Polygon {
    /// # Panics
    /// Panics if the polygon has no vertices.
    fn bounding_box(&self) -> Aabb {
        let (first, rest) = self
            .vertices
            .split_first()
            .expect("bounding box of a polygon without vertices");

        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));

        Aabb::new(min, max)
    }

    /// Not supported: a polygon has no defined origin to recentre around, so this leaves
    /// the vertices untouched. Move a polygon with [`Polygon::set_vertices`].
    fn update_position(&mut self, _position: Vec2) {}

    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }
}

impl From<Aabb> for Polygon {
    fn from(aabb: Aabb) -> Self {
        aabb.to_polygon()
    }
}
