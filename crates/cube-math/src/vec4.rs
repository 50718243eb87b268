//! 4D vector type laid out for 4-wide SIMD registers.
//!
//! [`Vec4`] is 16-byte aligned so a whole value loads into one register.
//! Arithmetic goes through [`crate::simd`]; only [`dot`](Vector::dot) stays
//! scalar, which is faster for the single dot products the kernel issues.
//!
//! # Homogeneous coordinates
//!
//! For 3D work a `Vec4` behaves like a [`Vec3`] in homogeneous space. The
//! caller decides what `w` means before multiplying by a [`Mat4`](crate::Mat4):
//! `w = 1` for a point (affected by translation), `w = 0` for a free
//! direction. Most geometric operations expect `w = 0`. The kernel does not
//! check either convention.
//!
//! ```rust
//! use cube_math::{Mat4, Vec3, Vec4, Vector};
//!
//! let m = Mat4::create_translate(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(m * Vec4::point(Vec3::ZERO), Vec4::new(1.0, 2.0, 3.0, 1.0));
//! assert_eq!(m * Vec4::direction(Vec3::X), Vec4::new(1.0, 0.0, 0.0, 0.0));
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::{Vec3, Vector, simd};

/// A 16-byte aligned 4D vector of `f32`.
///
/// Colour aliases: [`rgb`](Vec4::rgb) and [`a`](Vec4::a) read the same
/// lanes as [`xyz`](Vec4::xyz) and `w`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct Vec4 {
    /// X component (R for colours)
    pub x: f32,
    /// Y component (G for colours)
    pub y: f32,
    /// Z component (B for colours)
    pub z: f32,
    /// Homogeneous coordinate (A for colours)
    pub w: f32,
}

impl Vec4 {
    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extends a [`Vec3`] with an explicit `w`.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// A homogeneous point (`w = 1`).
    #[inline]
    pub const fn point(v: Vec3) -> Self {
        Self::from_vec3(v, 1.0)
    }

    /// A homogeneous direction (`w = 0`).
    #[inline]
    pub const fn direction(v: Vec3) -> Self {
        Self::from_vec3(v, 0.0)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The first three components.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The first three components read as a colour.
    #[inline]
    pub const fn rgb(self) -> Vec3 {
        self.xyz()
    }

    /// The fourth component read as alpha.
    #[inline]
    pub const fn a(self) -> f32 {
        self.w
    }

    /// Cross product of the xyz parts. The result always has `w = 0`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_array(simd::cross_x4(&self.to_array(), &other.to_array()))
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Vector for Vec4 {
    const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    fn reject_length(self, other: Self) -> f32 {
        self.cross(other).length() / other.length()
    }

    #[inline]
    fn normalize(self) -> Self {
        let length = self.length();
        if length != 0.0 {
            Self::from_array(simd::scale_x4(&self.to_array(), 1.0 / length))
        } else {
            Self::ZERO
        }
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array(simd::neg_x4(&self.to_array()))
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_array(simd::add_x4(&self.to_array(), &rhs.to_array()))
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_array(simd::sub_x4(&self.to_array(), &rhs.to_array()))
    }
}

impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_array(simd::mul_x4(&self.to_array(), &rhs.to_array()))
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_array(simd::scale_x4(&self.to_array(), rhs))
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_array(simd::div_x4(&self.to_array(), &rhs.to_array()))
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_array(simd::div_scalar_x4(&self.to_array(), rhs))
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec4_layout() {
        assert_eq!(std::mem::size_of::<Vec4>(), 16);
        assert_eq!(std::mem::align_of::<Vec4>(), 16);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..16], &4.0f32.to_ne_bytes());
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 4.0, 6.0, 8.0);

        assert_eq!(a + b, Vec4::new(3.0, 6.0, 9.0, 12.0));
        assert_eq!(b - a, a);
        assert_eq!(a * b, Vec4::new(2.0, 8.0, 18.0, 32.0));
        assert_eq!(a * 2.0, b);
        assert_eq!(2.0 * a, b);
        assert_eq!(b / a, Vec4::splat(2.0));
        assert_eq!(b / 2.0, a);
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_vec4_div_scalar_is_exact() {
        // true division, not a multiply by the rounded reciprocal
        let v = Vec4::splat(1.026) / 0.84;
        assert_eq!(v, Vec4::splat(1.026f32 / 0.84f32));

        let mut w = Vec4::splat(1.026);
        w /= 0.84;
        assert_eq!(w, v);
    }

    #[test]
    fn test_vec4_neg_zero() {
        let z = -Vec4::ZERO;
        assert!(z.to_array().iter().all(|v| v.is_sign_negative()));
        assert_eq!(z, Vec4::ZERO);
    }

    #[test]
    fn test_vec4_compound() {
        let mut v = Vec4::ONE;
        v += Vec4::W;
        v *= 4.0;
        assert_eq!(v, Vec4::new(4.0, 4.0, 4.0, 8.0));
        v /= 4.0;
        assert_eq!(v, Vec4::new(1.0, 1.0, 1.0, 2.0));
        v[3] = 0.0;
        assert_eq!(v.w, 0.0);
    }

    #[test]
    fn test_vec4_aliases() {
        let c = Vec4::new(0.1, 0.2, 0.3, 0.5);
        assert_eq!(c.rgb(), Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(c.a(), 0.5);
        assert_eq!(Vec4::point(Vec3::X).w, 1.0);
        assert_eq!(Vec4::direction(Vec3::X).w, 0.0);
        assert_eq!(Vec4::from_vec3(Vec3::Y, 0.25).xyz(), Vec3::Y);
    }

    #[test]
    fn test_vec4_cross_matches_vec3() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c4 = Vec4::point(a).cross(Vec4::point(b));
        assert_eq!(c4.xyz(), a.cross(b));
        assert_eq!(c4.w, 0.0);
    }

    #[test]
    fn test_vec4_normalize() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        let n = v.normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.w, 0.8, epsilon = 1e-6);
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
        assert_abs_diff_eq!(v.normalize_fast().length(), 1.0, epsilon = 1e-3);
        assert_eq!(v.length_squared(), v.dot(v));
    }

    #[test]
    fn test_vec4_geometry() {
        let a = Vec4::new(2.0, 3.0, 0.0, 0.0);
        let b = Vec4::new(0.0, 4.0, 0.0, 0.0);
        assert_eq!(a.project(b), Vec4::new(0.0, 3.0, 0.0, 0.0));
        assert_eq!(a.reject(b), Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(a.reject_length(b), 2.0);
        assert_eq!(a.project_length(b), 3.0);
        assert_eq!(
            Vec4::new(1.0, -1.0, 0.0, 0.0).reflect(Vec4::Y),
            Vec4::new(1.0, 1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_vec4_refract_tir() {
        let grazing = Vec4::new(1.0, -0.05, 0.0, 0.0).normalize();
        assert_eq!(grazing.refract(Vec4::Y, 1.5), Vec4::ZERO);
        let straight = Vec4::new(0.0, -1.0, 0.0, 0.0);
        assert_eq!(straight.refract(Vec4::Y, 1.5), straight);
    }

    #[test]
    #[should_panic]
    fn test_vec4_refract_fast_panics() {
        let _ = Vec4::X.refract_fast(Vec4::Y, 1.5);
    }
}
