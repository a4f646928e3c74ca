//! Invariant checks, meant to be wrapped in `debug_assert!`.

use crate::consts::{EPSILON, LANES};
use crate::intersect::Intersects;
use crate::math::Vec2;
use crate::shape::{Aabb, Shape};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::warn;

/// The derived fields of the box agree with its bounds.
/// Boxes with non-finite bounds or extents have no meaningful derived fields and always pass.
pub fn aabb_is_consistent(aabb: &Aabb) -> bool {
    let (min, max) = (aabb.min_bound(), aabb.max_bound());
    let centre = (min + max) * 0.5;
    let half = (max - min) * 0.5;

    let finite = |v: Vec2| v.x.is_finite() && v.y.is_finite();
    if !(finite(centre) && finite(half) && half.magnitude().is_finite()) {
        return true;
    }

    let vec_matches =
        |a: Vec2, b: Vec2| approx_eq!(f32, a.x, b.x, ulps = 4) && approx_eq!(f32, a.y, b.y, ulps = 4);

    vec_matches(aabb.centre(), centre)
        && vec_matches(aabb.half_size_vec(), half)
        && approx_eq!(f32, aabb.half_size_length(), half.magnitude(), ulps = 4)
}

/// Every turn of the ring goes the same way (collinear and repeated vertices are tolerated).
pub fn ring_is_convex(ring: &[Vec2]) -> bool {
    let (mut any_left, mut any_right) = (false, false);
    for (a, b, c) in ring.iter().copied().circular_tuple_windows() {
        let turn = (b - a).cross(c - b);
        let scale = (b - a).magnitude() * (c - b).magnitude();
        any_left |= turn > EPSILON * scale;
        any_right |= turn < -EPSILON * scale;
    }
    if any_left && any_right {
        warn!("[SHAPE] non-convex ring: {:?}", ring);
        return false;
    }
    true
}

/// Both operand orders of the overlap test agree.
pub fn intersection_is_symmetric(s1: &Shape, s2: &Shape) -> bool {
    let (forward, backward) = (s1.intersects(s2), s2.intersects(s1));
    if forward != backward {
        warn!(
            "[SHAPE] asymmetric overlap test: {:?} -> {}, reverse -> {}",
            (s1, s2),
            forward,
            backward
        );
    }
    forward == backward
}

/// Lane results agree up to a couple of ulps (NaN lanes match NaN lanes).
pub fn lanes_match(a: &[f32; LANES], b: &[f32; LANES]) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x.is_nan() && y.is_nan()) || approx_eq!(f32, *x, *y, ulps = 2))
}
