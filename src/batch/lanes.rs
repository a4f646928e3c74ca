//! Lane-wise kernels over one component array of a [`FourVec4`](super::FourVec4).
//! Plain fixed-width loops, which the compiler turns into packed instructions.

use crate::consts::LANES;

type Lanes = [f32; LANES];

#[inline(always)]
pub fn add(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i] + b[i])
}

#[inline(always)]
pub fn sub(a: &Lanes, b: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i] - b[i])
}

#[inline(always)]
pub fn neg(a: &Lanes) -> Lanes {
    std::array::from_fn(|i| -a[i])
}

#[inline(always)]
pub fn scale(a: &Lanes, scalar: f32) -> Lanes {
    std::array::from_fn(|i| a[i] * scalar)
}

#[inline(always)]
pub fn div(a: &Lanes, scalar: f32) -> Lanes {
    std::array::from_fn(|i| a[i] / scalar)
}

/// `a / d` per lane, zero wherever `d` is zero
#[inline(always)]
pub fn div_guarded(a: &Lanes, d: &Lanes) -> Lanes {
    std::array::from_fn(|i| match d[i] == 0.0 {
        true => 0.0,
        false => a[i] / d[i],
    })
}

#[inline(always)]
pub fn sqrt(a: &Lanes) -> Lanes {
    std::array::from_fn(|i| a[i].sqrt())
}

/// Per-lane dot product of two vectors given as their `[x, y, z, w]` component arrays.
/// Accumulates in `x, y, z, w` order, matching [`Vec4::dot`](crate::math::Vec4::dot).
#[inline(always)]
pub fn dot(a: [&Lanes; 4], b: [&Lanes; 4]) -> Lanes {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    std::array::from_fn(|i| ax[i] * bx[i] + ay[i] * by[i] + az[i] * bz[i] + aw[i] * bw[i])
}
