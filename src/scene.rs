use crate::config::SceneGenConfig;
use crate::consts::{MIN_POLYGON_VERTICES, PI};
use crate::intersect::Intersects;
use crate::math::Vec2;
use crate::shape::{Aabb, Circle, Polygon, Shape};
use crate::util::assertions;
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named set of shapes, the input format of the `crackitos` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneReport {
    pub name: String,
    pub n_shapes: usize,
    /// Index pairs `(i, j)` with `i < j` of all overlapping shapes
    pub overlapping_pairs: Vec<(usize, usize)>,
}

impl Scene {
    pub fn new(name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }

    /// Tests every pair of shapes against each other.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        self.shapes
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter(|((_, s1), (_, s2))| {
                debug_assert!(assertions::intersection_is_symmetric(s1, s2));
                s1.intersects(s2)
            })
            .map(|((i, _), (j, _))| (i, j))
            .collect()
    }

    pub fn report(&self) -> SceneReport {
        SceneReport {
            name: self.name.clone(),
            n_shapes: self.shapes.len(),
            overlapping_pairs: self.overlapping_pairs(),
        }
    }

    /// Generates an even mix of boxes, circles and convex regular polygons.
    pub fn random(rng: &mut impl Rng, config: &SceneGenConfig) -> Self {
        let max_n_vertices = config.max_polygon_vertices.max(MIN_POLYGON_VERTICES);
        let (min_size, max_size) = config.size_range;

        let shapes = (0..config.n_shapes)
            .map(|i| {
                let centre = Vec2::new(
                    rng.random_range(0.0..=config.extent),
                    rng.random_range(0.0..=config.extent),
                );
                let size = rng.random_range(min_size..=max_size);
                match i % 3 {
                    0 => {
                        let aspect = rng.random_range(0.5..=2.0);
                        Shape::Aabb(Aabb::from_centre_size(centre, size, size / aspect))
                    }
                    1 => Shape::Circle(Circle::new(centre, size / 2.0)),
                    _ => {
                        let n_vertices = rng.random_range(MIN_POLYGON_VERTICES..=max_n_vertices);
                        let rotation = rng.random_range(0.0..2.0 * PI);
                        Shape::Polygon(regular_polygon(centre, size / 2.0, n_vertices, rotation))
                    }
                }
            })
            .collect();

        Scene::new("random", shapes)
    }
}

/// Counter-clockwise regular polygon inscribed in the circle `(centre, radius)`.
pub fn regular_polygon(centre: Vec2, radius: f32, n_vertices: usize, rotation: f32) -> Polygon {
    let vertices = (0..n_vertices)
        .map(|i| {
            let angle = rotation + 2.0 * PI * i as f32 / n_vertices as f32;
            let (sin, cos) = angle.sin_cos();
            centre + Vec2::new(cos, sin) * radius
        })
        .collect();
    Polygon::new(vertices)
}
