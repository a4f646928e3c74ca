//! SIMD versions of the kernels in [`lanes`](super::lanes), one `f32x4` per component array.
//! Debug builds check every result against the scalar kernels.

use crate::batch::lanes;
use crate::consts::LANES;
use crate::util::assertions::lanes_match;
use std::simd::Simd;
use std::simd::StdFloat;
use std::simd::prelude::SimdPartialEq;

#[allow(non_camel_case_types)]
type f32xN = Simd<f32, LANES>;

type Lanes = [f32; LANES];

#[inline(always)]
pub fn add(a: &Lanes, b: &Lanes) -> Lanes {
    let r = (f32xN::from_array(*a) + f32xN::from_array(*b)).to_array();
    debug_assert!(lanes_match(&r, &lanes::add(a, b)));
    r
}

#[inline(always)]
pub fn sub(a: &Lanes, b: &Lanes) -> Lanes {
    let r = (f32xN::from_array(*a) - f32xN::from_array(*b)).to_array();
    debug_assert!(lanes_match(&r, &lanes::sub(a, b)));
    r
}

#[inline(always)]
pub fn neg(a: &Lanes) -> Lanes {
    let r = (-f32xN::from_array(*a)).to_array();
    debug_assert!(lanes_match(&r, &lanes::neg(a)));
    r
}

#[inline(always)]
pub fn scale(a: &Lanes, scalar: f32) -> Lanes {
    let r = (f32xN::from_array(*a) * f32xN::splat(scalar)).to_array();
    debug_assert!(lanes_match(&r, &lanes::scale(a, scalar)));
    r
}

#[inline(always)]
pub fn div(a: &Lanes, scalar: f32) -> Lanes {
    let r = (f32xN::from_array(*a) / f32xN::splat(scalar)).to_array();
    debug_assert!(lanes_match(&r, &lanes::div(a, scalar)));
    r
}

#[inline(always)]
pub fn div_guarded(a: &Lanes, d: &Lanes) -> Lanes {
    let zero = f32xN::splat(0.0);
    let d_n = f32xN::from_array(*d);

    // lanes with a zero divisor are masked to zero instead of producing inf/NaN
    let zero_mask = d_n.simd_eq(zero);
    let r = zero_mask
        .select(zero, f32xN::from_array(*a) / d_n)
        .to_array();

    debug_assert!(lanes_match(&r, &lanes::div_guarded(a, d)));
    r
}

#[inline(always)]
pub fn sqrt(a: &Lanes) -> Lanes {
    let r = f32xN::from_array(*a).sqrt().to_array();
    debug_assert!(lanes_match(&r, &lanes::sqrt(a)));
    r
}

#[inline(always)]
pub fn dot(a: [&Lanes; 4], b: [&Lanes; 4]) -> Lanes {
    let [ax, ay, az, aw] = a.map(|c| f32xN::from_array(*c));
    let [bx, by, bz, bw] = b.map(|c| f32xN::from_array(*c));

    let r = (ax * bx + ay * by + az * bz + aw * bw).to_array();

    debug_assert!(lanes_match(&r, &lanes::dot(a, b)));
    r
}
