use crate::consts::EPSILON;

mod quaternion;
mod vec2;
mod vec3;
mod vec4;

pub use quaternion::Quaternion;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Checks whether two values lie within [`EPSILON`] of each other.
#[inline(always)]
pub fn approx(value: f32, target: f32) -> bool {
    (value - target).abs() <= EPSILON
}
