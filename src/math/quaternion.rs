use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Rotation quaternion: `w` is the real part, `v` the imaginary part.
/// Defaults to the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub v: Vec3,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        v: Vec3::ZERO,
    };

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            w,
            v: Vec3::new(x, y, z),
        }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn conjugate(self) -> Quaternion {
        Quaternion { w: self.w, v: -self.v }
    }

    /// Builds a rotation from Euler angles (radians) around x, y and z.
    pub fn from_euler(x: f32, y: f32, z: f32) -> Quaternion {
        let (sin_x, cos_x) = (x * 0.5).sin_cos();
        let (sin_y, cos_y) = (y * 0.5).sin_cos();
        let (sin_z, cos_z) = (z * 0.5).sin_cos();

        Quaternion::new(
            cos_x * cos_y * cos_z + sin_x * sin_y * sin_z,
            sin_x * cos_y * cos_z - cos_x * sin_y * sin_z,
            cos_x * sin_y * cos_z + sin_x * cos_y * sin_z,
            cos_x * cos_y * sin_z - sin_x * sin_y * cos_z,
        )
    }

    pub fn square_magnitude(self) -> f32 {
        self.w * self.w + self.v.square_magnitude()
    }

    /// Rotates `p` by this quaternion (assumed unit length): `q * p * q⁻¹`
    pub fn rotate(self, p: Vec3) -> Vec3 {
        let pure = Quaternion { w: 0.0, v: p };
        (self * pure * self.conjugate()).v
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Hamilton product
    fn mul(self, other: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.v.dot(other.v),
            v: self.v * other.w + other.v * self.w + self.v.cross(other.v),
        }
    }
}
