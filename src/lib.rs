#![cfg_attr(feature = "simd", feature(portable_simd))]

use std::sync::LazyLock;
use std::time::Instant;

pub mod batch;
pub mod config;
pub mod consts;
pub mod intersect;
pub mod math;
pub mod scene;
pub mod shape;
pub mod timer;
pub mod util;

pub use batch::FourVec4;
pub use config::*;
pub use intersect::{Intersects, intersect};
pub use math::{Quaternion, Vec2, Vec3, Vec4};
pub use shape::{Aabb, Bounded, Circle, Polygon, Shape, ShapeType};
pub use timer::Timer;

/// Instant the process first touched the crate, used as the origin for log timestamps.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
