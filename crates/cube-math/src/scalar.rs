//! Scalar utilities shared by the vector and matrix types.
//!
//! - Ordering helpers generic over integers and floats ([`clamp`], [`min`],
//!   [`max`], [`abs`], [`modulo`])
//! - Interpolation ([`lerp`], [`inv_lerp`], [`remap_range`])
//! - Angle helpers ([`deg_to_rad`], [`rad_to_deg`], [`mod_pi`])
//! - Square roots ([`sqrt`], [`rsqrt`]) and rounding to `i32`
//!
//! # Usage
//!
//! ```rust
//! use cube_math::{clamp, deg_to_rad, lerp, modulo};
//!
//! assert_eq!(clamp(12, 0, 10), 10);
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(modulo(-1, 3), 2);
//! assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
//! ```
//!
//! None of the interpolation helpers clamp or guard against division by
//! zero. Callers clamp `t` themselves when they need bounded results.

use std::f32::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::simd;

/// Converts degrees to radians.
#[inline]
pub const fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub const fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Wraps an angle in radians into `[-π, π)`.
///
/// Shifts by π, takes the unsigned remainder by 2π using a truncated integer
/// quotient, shifts back and restores the sign when the shifted angle was
/// negative. Odd multiples of π (`±π`, `±3π`, ...) land on `-π`, up to the
/// rounding of the shifted angle.
///
/// # Example
///
/// ```rust
/// use cube_math::mod_pi;
/// use std::f32::consts::PI;
///
/// assert!((mod_pi(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
/// assert!((mod_pi(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
/// ```
#[inline]
pub fn mod_pi(angle: f32) -> f32 {
    const TWO_PI: f32 = 2.0 * PI;
    let shifted = angle + PI;
    let mut t = shifted.abs();
    t -= TWO_PI * ((t / TWO_PI) as i32) as f32;
    t -= PI;
    if shifted < 0.0 {
        t = -t;
    }
    t
}

/// Single-precision square root.
#[inline]
pub fn sqrt(f: f32) -> f32 {
    f.sqrt()
}

/// Fast approximate reciprocal square root.
///
/// Roughly 12 bits of precision on x86. Use `1.0 / sqrt(f)` where
/// correctness matters more than speed.
#[inline]
pub fn rsqrt(f: f32) -> f32 {
    simd::rsqrt(f)
}

/// Rounds towards positive infinity.
#[inline]
pub fn ceil(f: f32) -> i32 {
    f.ceil() as i32
}

/// Rounds towards negative infinity.
#[inline]
pub fn floor(f: f32) -> i32 {
    f.floor() as i32
}

/// Rounds to the nearest integer, ties to even.
///
/// ```rust
/// use cube_math::round;
///
/// assert_eq!(round(2.5), 2);
/// assert_eq!(round(3.5), 4);
/// assert_eq!(round(-1.6), -2);
/// ```
#[inline]
pub fn round(f: f32) -> i32 {
    f.round_ties_even() as i32
}

/// Rounds towards zero.
#[inline]
pub fn trunc(f: f32) -> i32 {
    f.trunc() as i32
}

/// Clamps `val` to `[min, max]`.
///
/// The low bound is applied first, so `min > max` yields `max`.
///
/// # Example
///
/// ```rust
/// use cube_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(7u8, 1, 5), 5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    let t = if val < min { min } else { val };
    if t > max { max } else { t }
}

/// Smaller of two values.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Larger of two values.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Absolute value for any signed numeric type.
#[inline]
pub fn abs<T>(val: T) -> T
where
    T: PartialOrd + Neg<Output = T> + Default,
{
    if val > T::default() { val } else { -val }
}

/// Mathematical modulo: the result takes the sign of `b`.
///
/// Unlike `%`, `modulo(-1, 3)` is `2`.
#[inline]
pub fn modulo<T>(a: T, b: T) -> T
where
    T: Rem<Output = T> + Add<Output = T> + Copy,
{
    (a % b + b) % b
}

/// Linear interpolation `a * (1 - t) + b * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate. Works for any
/// numeric type with the arithmetic operators and a `1` from `u8`.
///
/// # Example
///
/// ```rust
/// use cube_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// assert_eq!(lerp(2i32, 8, 1), 8);
/// ```
#[inline]
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + From<u8>,
{
    a * (T::from(1) - t) + b * t
}

/// Inverse of [`lerp`]: `(val - a) / (b - a)`.
///
/// Divides by zero when `a == b` (`inf`/`NaN` for floats, a panic for
/// integers).
#[inline]
pub fn inv_lerp<T>(a: T, b: T, val: T) -> T
where
    T: Copy + Sub<Output = T> + Div<Output = T>,
{
    (val - a) / (b - a)
}

/// Maps `val` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// ```rust
/// use cube_math::remap_range;
///
/// assert_eq!(remap_range(0.0, 1.0, 0.0, 100.0, 0.5), 50.0);
/// ```
#[inline]
pub fn remap_range<T>(in_min: T, in_max: T, out_min: T, out_max: T, val: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + From<u8>,
{
    let t = inv_lerp(in_min, in_max, val);
    lerp(out_min, out_max, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_deg_rad() {
        assert_abs_diff_eq!(deg_to_rad(90.0), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rad_to_deg(deg_to_rad(50.0)), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_mod_pi_in_range() {
        for i in -40..=40 {
            let angle = i as f32 * 0.37;
            let wrapped = mod_pi(angle);
            assert!(wrapped >= -PI - 1e-5 && wrapped <= PI + 1e-5, "{angle} -> {wrapped}");
            // same angle modulo 2π
            assert_abs_diff_eq!(wrapped.sin(), angle.sin(), epsilon = 1e-4);
            assert_abs_diff_eq!(wrapped.cos(), angle.cos(), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_mod_pi_boundaries() {
        assert_abs_diff_eq!(mod_pi(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mod_pi(0.5 * PI), 0.5 * PI, epsilon = 1e-6);
        assert_abs_diff_eq!(mod_pi(-0.5 * PI), -0.5 * PI, epsilon = 1e-6);
        // the seam resolves to -π from both sides
        assert_eq!(mod_pi(PI), -PI);
        assert_eq!(mod_pi(-PI), -PI);
        assert_eq!(mod_pi(3.0 * PI), -PI);
        let neg = mod_pi(-3.0 * PI);
        assert!(neg < 0.0);
        assert_abs_diff_eq!(neg, -PI, epsilon = 1e-6);
        // negative shifted angles are mirrored back
        assert_abs_diff_eq!(mod_pi(-1.5 * PI), 0.5 * PI, epsilon = 1e-5);
    }

    #[test]
    fn test_sqrt_rsqrt() {
        assert_eq!(sqrt(16.0), 4.0);
        assert!((rsqrt(16.0) - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(ceil(1.2), 2);
        assert_eq!(ceil(-1.2), -1);
        assert_eq!(floor(1.8), 1);
        assert_eq!(floor(-1.2), -2);
        assert_eq!(round(0.5), 0);
        assert_eq!(round(1.5), 2);
        assert_eq!(round(1.4), 1);
        assert_eq!(trunc(-1.8), -1);
        assert_eq!(trunc(1.8), 1);
    }

    #[test]
    fn test_clamp_min_max_abs() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(1.5f32, 0.0, 1.0), 1.0);
        assert_eq!(min(3, 7), 3);
        assert_eq!(max(3.0, 7.0), 7.0);
        assert_eq!(abs(-4), 4);
        assert_eq!(abs(2.5f32), 2.5);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(7, 3), 1);
        assert_eq!(modulo(-7, 3), 2);
        assert_eq!(modulo(7, -3), -2);
        assert_eq!(modulo(-1i64, 5), 4);
        assert_abs_diff_eq!(modulo(-0.5f32, 2.0), 1.5);
    }

    #[test]
    fn test_lerp_inv_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(inv_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inv_lerp(0.0, 10.0, 10.0), 1.0);
        assert!(inv_lerp(1.0f32, 1.0, 2.0).is_infinite());
        assert!(inv_lerp(1.0f32, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_interpolation_generic() {
        assert_eq!(lerp(2.0f64, 4.0, 0.25), 2.5);
        assert_eq!(lerp(3i32, 9, 0), 3);
        assert_eq!(lerp(3i32, 9, 1), 9);
        assert_eq!(lerp(3i32, 9, 2), 15);
        assert_eq!(inv_lerp(0i32, 10, 20), 2);
        assert_eq!(inv_lerp(0.0f64, 4.0, 1.0), 0.25);
        assert_eq!(remap_range(0i64, 10, 0, 100, 10), 100);
        assert_eq!(remap_range(0.0f64, 2.0, 10.0, 20.0, 1.0), 15.0);
    }

    #[test]
    fn test_remap_range() {
        assert_eq!(remap_range(0.0, 1.0, 0.0, 100.0, 0.5), 50.0);
        assert_eq!(remap_range(0.0, 100.0, 0.0, 1.0, 50.0), 0.5);
        assert_eq!(remap_range(-1.0, 1.0, 0.0, 10.0, 0.0), 5.0);
    }
}
