//! Operation contract shared by [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3)
//! and [`Vec4`](crate::Vec4).
//!
//! The three vector types carry the same geometric operations. They are
//! written once here as provided methods of [`Vector`], in terms of the
//! type's own arithmetic operators and [`Vector::dot`]. Types override a
//! method only where they have a cheaper path (the 4-wide [`Vec4`](crate::Vec4)).
//!
//! # Preconditions
//!
//! - `normal` arguments of [`reflect`](Vector::reflect),
//!   [`refract`](Vector::refract) and the `_norm` variants are assumed to be
//!   unit length. Nothing checks this.
//! - [`normalize_fast`](Vector::normalize_fast) on a zero vector returns
//!   garbage (`inf`/`NaN`). Use [`normalize`](Vector::normalize) when the
//!   input may be zero.
//!
//! # Usage
//!
//! ```rust
//! use cube_math::{Vec3, Vector};
//!
//! let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
//! let bounced = incoming.reflect(Vec3::Y);
//! assert!((bounced.y - incoming.y.abs()).abs() < 1e-6);
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use crate::scalar::{rsqrt, sqrt};

/// Geometric operations common to all fixed-size `f32` vectors.
pub trait Vector:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
{
    /// All components zero.
    const ZERO: Self;

    /// Dot product.
    fn dot(self, other: Self) -> f32;

    /// Distance from `other` to `self` measured perpendicular to `other`.
    ///
    /// `|cross(a, b)| / |b|` in 3D and 4D, `|perp_dot(a, b)| / |b|` in 2D.
    fn reject_length(self, other: Self) -> f32;

    /// Euclidean length, `sqrt(dot(v, v))`.
    #[inline]
    fn length(self) -> f32 {
        sqrt(self.dot(self))
    }

    /// Squared length, `dot(v, v)`. Avoids the square root.
    #[inline]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns [`Vector::ZERO`] when the length is exactly zero instead of
    /// dividing by it.
    #[inline]
    fn normalize(self) -> Self {
        let length = self.length();
        if length != 0.0 {
            self * (1.0 / length)
        } else {
            Self::ZERO
        }
    }

    /// Approximate unit vector using the hardware reciprocal square root.
    ///
    /// The input must be non-zero.
    #[inline]
    fn normalize_fast(self) -> Self {
        self * rsqrt(self.dot(self))
    }

    /// Reflects `self` about the plane with unit normal `normal`:
    /// `a - 2 * n * dot(a, n)`.
    #[inline]
    fn reflect(self, normal: Self) -> Self {
        self - (normal * 2.0) * self.dot(normal)
    }

    /// Refracts `self` through a surface with unit normal `normal` by Snell's law.
    ///
    /// `ratio` is the ratio of refractive indices `n1 / n2`. Both vectors are
    /// assumed normalized. When the discriminant `sin_t` exceeds one the ray
    /// undergoes total internal reflection and the zero vector is returned.
    ///
    /// ```rust
    /// use cube_math::{Vec3, Vector};
    ///
    /// // straight through a surface with no index change
    /// let down = Vec3::new(0.0, -1.0, 0.0);
    /// assert_eq!(down.refract(Vec3::Y, 1.0), down);
    ///
    /// // grazing ray leaving glass into air: total internal reflection
    /// let grazing = Vec3::new(1.0, -0.1, 0.0).normalize();
    /// assert_eq!(grazing.refract(Vec3::Y, 1.5), Vec3::ZERO);
    /// ```
    #[inline]
    fn refract(self, normal: Self, ratio: f32) -> Self {
        let cos_i = -self.dot(normal);
        let sin_t = (ratio * ratio) * (1.0 - cos_i * cos_i);
        if sin_t <= 1.0 {
            self * ratio + normal * (ratio * cos_i - sqrt(1.0 - sin_t))
        } else {
            Self::ZERO
        }
    }

    /// Specialized refraction for known material pairs.
    ///
    /// Not implemented. Always panics so unfinished math is never used
    /// silently; call [`refract`](Vector::refract) instead.
    fn refract_fast(self, _normal: Self, _ratio: f32) -> Self {
        unimplemented!("refract_fast has no implementation yet, use refract")
    }

    /// Projection of `self` onto `other`: `(dot(a, b) / dot(b, b)) * b`.
    #[inline]
    fn project(self, other: Self) -> Self {
        other * (self.dot(other) / other.dot(other))
    }

    /// [`project`](Vector::project) for a unit-length `other`, skipping the division.
    #[inline]
    fn project_norm(self, other: Self) -> Self {
        other * self.dot(other)
    }

    /// Signed length of the projection of `self` onto `other`.
    #[inline]
    fn project_length(self, other: Self) -> f32 {
        self.dot(other) / other.length()
    }

    /// Component of `self` perpendicular to `other`.
    #[inline]
    fn reject(self, other: Self) -> Self {
        self - other * (self.dot(other) / other.dot(other))
    }

    /// [`reject`](Vector::reject) for a unit-length `other`.
    #[inline]
    fn reject_norm(self, other: Self) -> Self {
        self - other * self.dot(other)
    }
}
