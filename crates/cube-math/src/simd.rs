//! 4-wide SIMD helper layer.
//!
//! Every fused multiply/add, shuffle and reciprocal-square-root sequence the
//! kernel needs lives here, expressed on plain `[f32; 4]` lanes and executed
//! with [`wide::f32x4`]. `wide` selects SSE, NEON or WASM SIMD at compile
//! time and falls back to portable scalar code on targets without a 4-wide
//! unit, so callers never need their own `cfg` gates.
//!
//! # Example
//!
//! ```rust
//! use cube_math::simd::{cross_x4, dot_x4};
//!
//! let x = [1.0, 0.0, 0.0, 0.0];
//! let y = [0.0, 1.0, 0.0, 0.0];
//! assert_eq!(cross_x4(&x, &y), [0.0, 0.0, 1.0, 0.0]);
//! assert_eq!(dot_x4(&x, &y), 0.0);
//! ```
//!
//! # Precision
//!
//! [`rsqrt`] and [`rsqrt_x4`] use the hardware approximation where one
//! exists (about 12 bits of mantissa on x86). Do not use them where accuracy
//! matters more than speed.

use wide::f32x4;

/// Column-major 4x4 block as consumed by the matrix helpers.
pub type Columns = [[f32; 4]; 4];

#[inline]
fn load(v: &[f32; 4]) -> f32x4 {
    f32x4::from(*v)
}

/// Lane-wise `a + b`.
#[inline]
pub fn add_x4(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    (load(a) + load(b)).to_array()
}

/// Lane-wise `a - b`.
#[inline]
pub fn sub_x4(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    (load(a) - load(b)).to_array()
}

/// Lane-wise (Hadamard) `a * b`.
#[inline]
pub fn mul_x4(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    (load(a) * load(b)).to_array()
}

/// Lane-wise `a / b`.
#[inline]
pub fn div_x4(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    (load(a) / load(b)).to_array()
}

/// Multiplies all lanes by `s`.
#[inline]
pub fn scale_x4(a: &[f32; 4], s: f32) -> [f32; 4] {
    (load(a) * f32x4::splat(s)).to_array()
}

/// Divides all lanes by `s`.
#[inline]
pub fn div_scalar_x4(a: &[f32; 4], s: f32) -> [f32; 4] {
    (load(a) / f32x4::splat(s)).to_array()
}

/// Flips the sign bit of all lanes, so `0.0` becomes `-0.0`.
#[inline]
pub fn neg_x4(a: &[f32; 4]) -> [f32; 4] {
    (load(a) ^ f32x4::splat(-0.0)).to_array()
}

/// Dot product of 4-element vectors.
#[inline]
pub fn dot_x4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    (load(a) * load(b)).reduce_add()
}

/// Cross product of the xyz lanes; the w lane of the result is always zero.
///
/// Computes `a.yzx * b.zxy - a.zxy * b.yzx`, the two-shuffle form of the
/// 3D cross product.
#[inline]
pub fn cross_x4(a: &[f32; 4], b: &[f32; 4]) -> [f32; 4] {
    let a_yzx = f32x4::from([a[1], a[2], a[0], 0.0]);
    let a_zxy = f32x4::from([a[2], a[0], a[1], 0.0]);
    let b_yzx = f32x4::from([b[1], b[2], b[0], 0.0]);
    let b_zxy = f32x4::from([b[2], b[0], b[1], 0.0]);
    (a_yzx * b_zxy - a_zxy * b_yzx).to_array()
}

/// Fast approximate reciprocal square root of a single value.
#[inline]
pub fn rsqrt(f: f32) -> f32 {
    f32x4::splat(f).recip_sqrt().to_array()[0]
}

/// Fast approximate reciprocal square root of each lane.
#[inline]
pub fn rsqrt_x4(a: &[f32; 4]) -> [f32; 4] {
    load(a).recip_sqrt().to_array()
}

/// `cols * v`: sum of the four columns weighted by the lanes of `v`.
///
/// This is the building block for both matrix x vector and matrix x matrix
/// (one call per column of the right-hand side).
#[inline]
pub fn linear_combination(cols: &Columns, v: &[f32; 4]) -> [f32; 4] {
    let mut out = load(&cols[0]) * f32x4::splat(v[0]);
    out = out + load(&cols[1]) * f32x4::splat(v[1]);
    out = out + load(&cols[2]) * f32x4::splat(v[2]);
    out = out + load(&cols[3]) * f32x4::splat(v[3]);
    out.to_array()
}

/// [`linear_combination`] with the fourth column skipped.
///
/// Valid whenever `v[3]` is known to be zero, e.g. the first three columns
/// of an affine matrix or a direction vector.
#[inline]
pub fn linear_combination3(cols: &Columns, v: &[f32; 4]) -> [f32; 4] {
    let mut out = load(&cols[0]) * f32x4::splat(v[0]);
    out = out + load(&cols[1]) * f32x4::splat(v[1]);
    out = out + load(&cols[2]) * f32x4::splat(v[2]);
    out.to_array()
}

/// [`linear_combination3`] plus the fourth column unscaled (`v[3] == 1`).
#[inline]
pub fn linear_combination_point(cols: &Columns, v: &[f32; 4]) -> [f32; 4] {
    let mut out = load(&cols[0]) * f32x4::splat(v[0]);
    out = out + load(&cols[1]) * f32x4::splat(v[1]);
    out = out + load(&cols[2]) * f32x4::splat(v[2]);
    out = out + load(&cols[3]);
    out.to_array()
}

/// Transposes a 4x4 block.
#[inline]
pub fn transpose4(cols: &Columns) -> Columns {
    let [c0, c1, c2, c3] = *cols;
    [
        [c0[0], c1[0], c2[0], c3[0]],
        [c0[1], c1[1], c2[1], c3[1]],
        [c0[2], c1[2], c2[2], c3[2]],
        [c0[3], c1[3], c2[3], c3[3]],
    ]
}
