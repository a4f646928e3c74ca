use crate::consts::LANES;
use crate::math::Vec4;
use itertools::izip;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

pub mod lanes;
#[cfg(feature = "simd")]
pub mod simd;

#[cfg(not(feature = "simd"))]
use lanes as kernels;
#[cfg(feature = "simd")]
use simd as kernels;

/// Four independent [`Vec4`]s with a memory layout suited for data-parallel arithmetic:
/// SoA (Structure of Arrays) instead of AoS (Array of Structures).
///
/// Lane `i` is the vector `(x[i], y[i], z[i], w[i])`. Every operation is lane-local and
/// produces, lane by lane, exactly the result of the matching [`Vec4`] operation,
/// including its zero guards (division by zero and normalizing a zero vector give zero).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C, align(16))]
pub struct FourVec4 {
    pub x: [f32; LANES],
    pub y: [f32; LANES],
    pub z: [f32; LANES],
    pub w: [f32; LANES],
}

impl FourVec4 {
    pub const fn new(x: [f32; LANES], y: [f32; LANES], z: [f32; LANES], w: [f32; LANES]) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::new([0.0; LANES], [0.0; LANES], [0.0; LANES], [0.0; LANES])
    }

    /// The same vector in every lane
    pub const fn splat(v: Vec4) -> Self {
        Self::new([v.x; LANES], [v.y; LANES], [v.z; LANES], [v.w; LANES])
    }

    pub fn from_vecs(vecs: [Vec4; LANES]) -> Self {
        let mut batch = Self::zero();

        //scatter the vectors into the SoA format
        izip!(
            batch.x.iter_mut(),
            batch.y.iter_mut(),
            batch.z.iter_mut(),
            batch.w.iter_mut()
        )
        .zip(vecs.iter())
        .for_each(|((x, y, z, w), v)| {
            *x = v.x;
            *y = v.y;
            *z = v.z;
            *w = v.w;
        });

        batch
    }

    pub fn to_vecs(&self) -> [Vec4; LANES] {
        std::array::from_fn(|i| self.lane(i))
    }

    /// # Panics
    /// Panics if `i >= 4`.
    #[inline(always)]
    pub fn lane(&self, i: usize) -> Vec4 {
        Vec4::new(self.x[i], self.y[i], self.z[i], self.w[i])
    }

    /// # Panics
    /// Panics if `i >= 4`.
    pub fn set_lane(&mut self, i: usize, v: Vec4) {
        self.x[i] = v.x;
        self.y[i] = v.y;
        self.z[i] = v.z;
        self.w[i] = v.w;
    }

    /// Per-lane dot product
    #[inline(always)]
    pub fn dot(&self, other: &FourVec4) -> [f32; LANES] {
        kernels::dot([&self.x, &self.y, &self.z, &self.w], [&other.x, &other.y, &other.z, &other.w])
    }

    #[inline(always)]
    pub fn square_magnitude(&self) -> [f32; LANES] {
        self.dot(self)
    }

    #[inline(always)]
    pub fn magnitude(&self) -> [f32; LANES] {
        kernels::sqrt(&self.square_magnitude())
    }

    /// Divides every lane by its own magnitude. Lanes without length become zero.
    pub fn normalized(&self) -> FourVec4 {
        let mag = self.magnitude();
        FourVec4::new(
            kernels::div_guarded(&self.x, &mag),
            kernels::div_guarded(&self.y, &mag),
            kernels::div_guarded(&self.z, &mag),
            kernels::div_guarded(&self.w, &mag),
        )
    }
}

impl Add for FourVec4 {
    type Output = FourVec4;

    #[inline(always)]
    fn add(self, rhs: FourVec4) -> FourVec4 {
        FourVec4::new(
            kernels::add(&self.x, &rhs.x),
            kernels::add(&self.y, &rhs.y),
            kernels::add(&self.z, &rhs.z),
            kernels::add(&self.w, &rhs.w),
        )
    }
}

impl Sub for FourVec4 {
    type Output = FourVec4;

    #[inline(always)]
    fn sub(self, rhs: FourVec4) -> FourVec4 {
        FourVec4::new(
            kernels::sub(&self.x, &rhs.x),
            kernels::sub(&self.y, &rhs.y),
            kernels::sub(&self.z, &rhs.z),
            kernels::sub(&self.w, &rhs.w),
        )
    }
}

impl Neg for FourVec4 {
    type Output = FourVec4;

    fn neg(self) -> FourVec4 {
        FourVec4::new(
            kernels::neg(&self.x),
            kernels::neg(&self.y),
            kernels::neg(&self.z),
            kernels::neg(&self.w),
        )
    }
}

impl Mul<f32> for FourVec4 {
    type Output = FourVec4;

    #[inline(always)]
    fn mul(self, scalar: f32) -> FourVec4 {
        FourVec4::new(
            kernels::scale(&self.x, scalar),
            kernels::scale(&self.y, scalar),
            kernels::scale(&self.z, scalar),
            kernels::scale(&self.w, scalar),
        )
    }
}

impl Mul<FourVec4> for f32 {
    type Output = FourVec4;

    fn mul(self, batch: FourVec4) -> FourVec4 {
        batch * self
    }
}

impl Div<f32> for FourVec4 {
    type Output = FourVec4;

    /// Dividing by zero yields zero in every lane, like [`Vec4`]
    fn div(self, scalar: f32) -> FourVec4 {
        if scalar == 0.0 {
            return FourVec4::zero();
        }
        FourVec4::new(
            kernels::div(&self.x, scalar),
            kernels::div(&self.y, scalar),
            kernels::div(&self.z, scalar),
            kernels::div(&self.w, scalar),
        )
    }
}

impl AddAssign for FourVec4 {
    fn add_assign(&mut self, rhs: FourVec4) {
        *self = *self + rhs;
    }
}

impl SubAssign for FourVec4 {
    fn sub_assign(&mut self, rhs: FourVec4) {
        *self = *self - rhs;
    }
}

impl From<[Vec4; LANES]> for FourVec4 {
    fn from(vecs: [Vec4; LANES]) -> Self {
        FourVec4::from_vecs(vecs)
    }
}
