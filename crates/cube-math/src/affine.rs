//! Fast paths for affine matrices.
//!
//! A model or view matrix built only from rotation, axis-aligned scale and
//! translation has a bottom row of `[0, 0, 0, 1]` and mutually orthogonal
//! columns in its upper-left 3x3 block. The `*_trans` methods exploit that
//! structure to skip work the general [`Mat4`] operations would do.
//!
//! They do **not** check the structure in release builds. A sheared or
//! projective input silently produces a wrong result. Debug builds run
//! [`Mat4::debug_assert_affine`] on every input, and
//! [`Mat4::validate_affine`] is available as an explicit check.
//!
//! # Example
//!
//! ```rust
//! use cube_math::{Mat4, Vec3, Vector};
//!
//! let model = Mat4::create_translate(Vec3::new(1.0, 2.0, 3.0))
//!     * Mat4::create_rotation_z(0.5)
//!     * Mat4::create_scale(Vec3::new(2.0, 2.0, 2.0));
//!
//! let world = model.mul_trans_point(Vec3::ZERO);
//! assert_eq!(world, Vec3::new(1.0, 2.0, 3.0));
//!
//! let back = model.inverse_trans().mul_trans_point(world);
//! assert!(back.length_squared() < 1e-10);
//! ```

use crate::simd::{self, Columns};
use crate::{Error, Mat4, Result, Vec3, Vec4, Vector};

/// Tolerance used by [`Mat4::debug_assert_affine`].
pub const AFFINE_TOLERANCE: f32 = 1e-3;

impl Mat4 {
    /// `self * rhs` for two affine matrices.
    ///
    /// Columns 0..3 of `rhs` are directions (w = 0) so their products skip
    /// `self`'s translation column. Only column 3 takes the full four-term
    /// combination.
    pub fn mul_trans(&self, rhs: &Self) -> Self {
        self.debug_assert_affine();
        rhs.debug_assert_affine();

        let a = self.to_cols_array_2d();
        let b = rhs.to_cols_array_2d();
        Self::from_cols_array_2d([
            simd::linear_combination3(&a, &b[0]),
            simd::linear_combination3(&a, &b[1]),
            simd::linear_combination3(&a, &b[2]),
            simd::linear_combination(&a, &b[3]),
        ])
    }

    /// Transforms a direction (w = 0). Translation is ignored.
    pub fn mul_trans_vec(&self, v: Vec3) -> Vec3 {
        self.debug_assert_affine();
        let out = simd::linear_combination3(&self.to_cols_array_2d(), &Vec4::direction(v).to_array());
        Vec4::from_array(out).xyz()
    }

    /// Transforms a point (w = 1). Translation is applied.
    pub fn mul_trans_point(&self, p: Vec3) -> Vec3 {
        self.debug_assert_affine();
        let out = simd::linear_combination_point(&self.to_cols_array_2d(), &Vec4::point(p).to_array());
        Vec4::from_array(out).xyz()
    }

    /// Inverse of an affine matrix without shear.
    ///
    /// With the 3x3 block `R * S` (orthogonal columns `c0, c1, c2`) the
    /// inverse block is `S^-1 * R^T`, whose row `i` is `c_i / |c_i|^2`. The
    /// translation becomes `-(R^-1 * t)`. The bottom row of the result is
    /// exactly `[0, 0, 0, 1]`.
    pub fn inverse_trans(&self) -> Self {
        self.debug_assert_affine();

        let [c0, c1, c2, t] = self.cols;
        let mut rows: Columns = simd::transpose4(&[
            Vec4::direction(c0.xyz()).to_array(),
            Vec4::direction(c1.xyz()).to_array(),
            Vec4::direction(c2.xyz()).to_array(),
            [0.0; 4],
        ]);

        // lane i holds |c_i|^2; lane 3 must stay finite
        let mut length_sq = simd::mul_x4(&rows[0], &rows[0]);
        length_sq = simd::add_x4(&length_sq, &simd::mul_x4(&rows[1], &rows[1]));
        length_sq = simd::add_x4(&length_sq, &simd::mul_x4(&rows[2], &rows[2]));
        length_sq[3] = 1.0;
        let inv_length_sq = simd::div_x4(&[1.0; 4], &length_sq);

        for col in rows.iter_mut().take(3) {
            *col = simd::mul_x4(col, &inv_length_sq);
        }

        let mut translation = simd::neg_x4(&simd::linear_combination3(&rows, &t.to_array()));
        translation[3] = 1.0;
        rows[3] = translation;

        Self::from_cols_array_2d(rows)
    }

    /// Adjugate of the upper-left 3x3 block, embedded in an identity.
    ///
    /// Equal to `det * inverse` of that block. Use its transpose to carry
    /// normals through a non-uniformly scaled model matrix; the scale factor
    /// `det` disappears after renormalizing. Translation is discarded.
    pub fn adjugate_trans(&self) -> Self {
        self.debug_assert_affine();

        let [c0, c1, c2, _] = self.cols;
        let rows = [
            c1.cross(c2).to_array(),
            c2.cross(c0).to_array(),
            c0.cross(c1).to_array(),
            Vec4::W.to_array(),
        ];
        Self::from_cols_array_2d(simd::transpose4(&rows))
    }

    /// Diagonal of the 3x3 block.
    ///
    /// This is the scale only while the matrix carries no rotation.
    #[inline]
    pub fn get_scale(&self) -> Vec3 {
        Vec3::new(self.cols[0].x, self.cols[1].y, self.cols[2].z)
    }

    /// Translation stored in column 3.
    #[inline]
    pub fn get_translation(&self) -> Vec3 {
        self.cols[3].xyz()
    }

    /// Checks that `self` satisfies the affine fast-path preconditions.
    ///
    /// - bottom row within `tolerance` of `[0, 0, 0, 1]`
    /// - every axis of the 3x3 block finite with non-zero length
    /// - every pair of axes within `tolerance` of orthogonal (cosine)
    ///
    /// Axis lengths are not compared against `tolerance`, so small uniform
    /// scales (e.g. millimetre units) pass.
    ///
    /// ```rust
    /// use cube_math::{Error, Mat4};
    ///
    /// assert!(Mat4::create_rotation_x(1.0).validate_affine(1e-4).is_ok());
    ///
    /// let proj = Mat4::create_perspective(1.0, 1.0, 0.1, 10.0);
    /// assert!(matches!(proj.validate_affine(1e-4), Err(Error::NotAffine { .. })));
    /// ```
    pub fn validate_affine(&self, tolerance: f32) -> Result<()> {
        let row = self.row(3);
        if row.xyz().to_array().iter().any(|v| v.abs() > tolerance) || (row.w - 1.0).abs() > tolerance {
            return Err(Error::NotAffine { row: row.to_array() });
        }

        let axes = self.cols.map(Vec4::xyz);
        for (axis, v) in axes.iter().take(3).enumerate() {
            let length_squared = v.length_squared();
            if length_squared == 0.0 || !length_squared.is_finite() {
                return Err(Error::DegenerateAxis { axis, length_squared });
            }
        }

        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let cosine = axes[a].dot(axes[b]) / (axes[a].length() * axes[b].length());
            if cosine.abs() > tolerance {
                return Err(Error::Sheared { a, b, cosine });
            }
        }

        Ok(())
    }

    /// Panics if `self` fails [`validate_affine`](Mat4::validate_affine)
    /// with [`AFFINE_TOLERANCE`].
    ///
    /// Only active with `debug_assertions`; compiles to nothing in release.
    #[inline]
    pub fn debug_assert_affine(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.validate_affine(AFFINE_TOLERANCE) {
                panic!("affine fast path called with non-affine matrix: {err}");
            }
        }
    }
}
