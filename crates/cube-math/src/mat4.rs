//! 4x4 matrix type for model, view and projection transforms.
//!
//! [`Mat4`] is the matrix every stage of the render loop hands to the GPU:
//! object placement, camera and perspective projection.
//!
//! # Convention
//!
//! Matrices are stored in **column-major** order and use **column vectors**.
//! Element `(row, col)` lives at `cols[col][row]`, so the memory image is
//! exactly a GLSL `mat4`:
//!
//! ```text
//!          cols[0] cols[1] cols[2] cols[3]
//! row 0 | m(0,0)  m(0,1)  m(0,2)  m(0,3) |   | x |
//! row 1 | m(1,0)  m(1,1)  m(1,2)  m(1,3) | * | y |  = x*cols[0] + y*cols[1]
//! row 2 | m(2,0)  m(2,1)  m(2,2)  m(2,3) |   | z |    + z*cols[2] + w*cols[3]
//! row 3 | m(3,0)  m(3,1)  m(3,2)  m(3,3) |   | w |
//! ```
//!
//! Products read right to left: `proj * view * model * v` applies `model`
//! first.
//!
//! The affine fast paths (`*_trans`) are in a separate `impl` block; see
//! [`Mat4::mul_trans`].
//!
//! # Usage
//!
//! ```rust
//! use cube_math::{deg_to_rad, Mat4, Vec3, Vec4, Vector};
//!
//! let model = Mat4::create_translate(Vec3::new(-0.33, 0.0, 0.0));
//! let view = Mat4::create_look_at(Vec3::new(3.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::create_perspective(deg_to_rad(50.0), 1.0, 0.1, 100.0);
//!
//! let clip = proj * view * model * Vec4::point(Vec3::ONE);
//! assert!(clip.w > 0.0);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::simd::{self, Columns};
use crate::{Vec3, Vec4, Vector};

/// A column-major 4x4 matrix of `f32`.
///
/// 64 bytes, 16-byte aligned, bit-compatible with a std140 `mat4`.
///
/// # Example
///
/// ```rust
/// use cube_math::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(Mat4::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct Mat4 {
    /// Columns 0..4.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_cols_array_2d([[0.0; 4]; 4]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::create_diagonal_matrix(1.0);

    /// Creates a matrix from four columns.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Creates a matrix from four rows.
    ///
    /// Handy when writing matrices out by hand in math notation.
    ///
    /// ```rust
    /// use cube_math::Mat4;
    ///
    /// let m = Mat4::from_rows([
    ///     [1.0, 0.0, 0.0, 5.0],
    ///     [0.0, 1.0, 0.0, 6.0],
    ///     [0.0, 0.0, 1.0, 7.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m[(0, 3)], 5.0);
    /// assert_eq!(m.cols[3].x, 5.0);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_cols_array_2d([
            [rows[0][0], rows[1][0], rows[2][0], rows[3][0]],
            [rows[0][1], rows[1][1], rows[2][1], rows[3][1]],
            [rows[0][2], rows[1][2], rows[2][2], rows[3][2]],
            [rows[0][3], rows[1][3], rows[2][3], rows[3][3]],
        ])
    }

    /// Creates from a column-major `[[f32; 4]; 4]` (`e[col][row]`).
    #[inline]
    pub const fn from_cols_array_2d(e: Columns) -> Self {
        Self::from_cols(
            Vec4::from_array(e[0]),
            Vec4::from_array(e[1]),
            Vec4::from_array(e[2]),
            Vec4::from_array(e[3]),
        )
    }

    /// Converts to a column-major `[[f32; 4]; 4]`.
    #[inline]
    pub const fn to_cols_array_2d(&self) -> Columns {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
            self.cols[3].to_array(),
        ]
    }

    /// Creates from 16 floats in column-major order.
    #[inline]
    pub fn from_cols_array(a: [f32; 16]) -> Self {
        bytemuck::cast(a)
    }

    /// Converts to 16 floats in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        self.cols[i]
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i])
    }

    /// Matrix with `val` on all four diagonal elements.
    ///
    /// `create_diagonal_matrix(1.0)` is the identity. Note `m(3,3)` is set
    /// too, so any `val != 1.0` gives a non-affine matrix; use
    /// [`create_scale`](Mat4::create_scale) to scale geometry.
    #[inline]
    pub const fn create_diagonal_matrix(val: f32) -> Self {
        let mut e = [[0.0; 4]; 4];
        e[0][0] = val;
        e[1][1] = val;
        e[2][2] = val;
        e[3][3] = val;
        Self::from_cols_array_2d(e)
    }

    /// Axis-aligned scale with `m(3,3) = 1`.
    #[inline]
    pub const fn create_scale(s: Vec3) -> Self {
        let mut e = [[0.0; 4]; 4];
        e[0][0] = s.x;
        e[1][1] = s.y;
        e[2][2] = s.z;
        e[3][3] = 1.0;
        Self::from_cols_array_2d(e)
    }

    /// Translation by `t`, stored in column 3 rows 0..3.
    #[inline]
    pub const fn create_translate(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = Vec4::point(t);
        m
    }

    /// Rotation by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` is normalized internally. Positive angles rotate
    /// counter-clockwise looking down the axis towards the origin, same as
    /// [`create_rotation_x`](Mat4::create_rotation_x) and friends.
    pub fn create_rotation(axis: Vec3, angle: f32) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = angle.sin_cos();
        let cv = 1.0 - c;

        let mut e = [[0.0; 4]; 4];
        e[0][0] = x * x * cv + c;
        e[0][1] = x * y * cv + z * s;
        e[0][2] = x * z * cv - y * s;

        e[1][0] = y * x * cv - z * s;
        e[1][1] = y * y * cv + c;
        e[1][2] = y * z * cv + x * s;

        e[2][0] = z * x * cv + y * s;
        e[2][1] = z * y * cv - x * s;
        e[2][2] = z * z * cv + c;

        e[3][3] = 1.0;
        Self::from_cols_array_2d(e)
    }

    /// Rotation by `angle` radians about +X.
    pub fn create_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[1] = Vec4::new(0.0, c, s, 0.0);
        m.cols[2] = Vec4::new(0.0, -s, c, 0.0);
        m
    }

    /// Rotation by `angle` radians about +Y.
    pub fn create_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0] = Vec4::new(c, 0.0, -s, 0.0);
        m.cols[2] = Vec4::new(s, 0.0, c, 0.0);
        m
    }

    /// Rotation by `angle` radians about +Z.
    ///
    /// Column 0 is `(cos, sin, 0, 0)` and column 1 is `(-sin, cos, 0, 0)`,
    /// so `m * X` turns towards +Y. Read as rows (or multiplied from the
    /// left, `v^T * m`) the sine signs flip.
    ///
    /// ```rust
    /// use cube_math::{Mat4, Vec3, Vec4};
    ///
    /// let m = Mat4::create_rotation_z(std::f32::consts::FRAC_PI_2);
    /// let v = m * Vec4::direction(Vec3::X);
    /// assert!((v.y - 1.0).abs() < 1e-6);
    /// ```
    pub fn create_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0] = Vec4::new(c, s, 0.0, 0.0);
        m.cols[1] = Vec4::new(-s, c, 0.0, 0.0);
        m
    }

    /// Right-handed view matrix looking from `eye` at `target`.
    ///
    /// The camera basis is `forward = normalize(eye - target)` (pointing
    /// away from the target, so the camera looks down -Z),
    /// `right = normalize(cross(up, forward))` and
    /// `up' = cross(forward, right)`. The basis vectors form the rows of the
    /// 3x3 block; column 3 is `-dot(axis, eye)` per row, which maps `eye`
    /// to the origin.
    ///
    /// `up` must not be parallel to `eye - target`.
    pub fn create_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (eye - target).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);
        Self::from_basis_rows(right, up, forward, eye)
    }

    /// First-person view matrix from an eye position and pitch/yaw angles
    /// in radians.
    ///
    /// Laid out like [`create_look_at`](Mat4::create_look_at), with
    ///
    /// ```text
    /// forward = (cos yaw, 0, -sin yaw)
    /// right   = (sin yaw * sin pitch,  cos pitch, cos yaw * sin pitch)
    /// up      = (sin yaw * cos pitch, -sin pitch, cos pitch * cos yaw)
    /// ```
    pub fn create_fpp_view(eye: Vec3, pitch: f32, yaw: f32) -> Self {
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        let (sin_yaw, cos_yaw) = yaw.sin_cos();

        let forward = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let right = Vec3::new(sin_yaw * sin_pitch, cos_pitch, cos_yaw * sin_pitch);
        let up = Vec3::new(sin_yaw * cos_pitch, -sin_pitch, cos_pitch * cos_yaw);
        Self::from_basis_rows(right, up, forward, eye)
    }

    // Rows (right, up, forward) plus the eye-to-origin translation.
    fn from_basis_rows(right: Vec3, up: Vec3, forward: Vec3, eye: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(right.x, up.x, forward.x, 0.0),
            Vec4::new(right.y, up.y, forward.y, 0.0),
            Vec4::new(right.z, up.z, forward.z, 0.0),
            Vec4::new(-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0),
        )
    }

    /// Right-handed perspective projection.
    ///
    /// `fov` is the vertical field of view in radians and `aspect` is
    /// width / height. View-space depth `-near` maps to NDC z = 0 and `-far`
    /// to z = 1 (zero-to-one depth range). `m(3,2) = -1` copies `-z` into
    /// clip w.
    ///
    /// ```rust
    /// use cube_math::{Mat4, Vec3, Vec4};
    ///
    /// let proj = Mat4::create_perspective(1.0, 1.0, 0.1, 100.0);
    /// let clip = proj * Vec4::point(Vec3::new(0.0, 0.0, -0.1));
    /// assert!((clip.z / clip.w).abs() < 1e-6);
    /// ```
    pub fn create_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let y = 1.0 / (fov * 0.5).tan();
        let x = y / aspect;

        let mut e = [[0.0; 4]; 4];
        e[0][0] = x;
        e[1][1] = y;
        e[2][2] = far / (near - far);
        e[2][3] = -1.0;
        e[3][2] = near * far / (near - far);
        Self::from_cols_array_2d(e)
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols_array_2d(simd::transpose4(&self.to_cols_array_2d()))
    }

    /// Determinant.
    ///
    /// Computed from two cross products of column pairs (0,1) and (2,3),
    /// the same intermediates [`inverse`](Mat4::inverse) reuses.
    pub fn det(&self) -> f32 {
        let (s, t, u, v) = self.cofactor_pairs();
        s.dot(v) + t.dot(u)
    }

    /// Inverse of a general 4x4 matrix.
    ///
    /// There is no singularity check: a singular matrix yields `inf`/`NaN`
    /// elements. Test with [`det`](Mat4::det) first when the input may be
    /// singular. For rotation/scale/translation matrices prefer the much
    /// cheaper [`inverse_trans`](Mat4::inverse_trans).
    ///
    /// ```rust
    /// use cube_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::create_translate(Vec3::new(1.0, 2.0, 3.0));
    /// let inv = m.inverse();
    /// assert_eq!(inv.get_translation(), Vec3::new(-1.0, -2.0, -3.0));
    /// ```
    pub fn inverse(&self) -> Self {
        let [a, b, c, d] = self.cols.map(Vec4::xyz);
        let [x, y, z, w] = self.row(3).to_array();

        let (s, t, u, v) = self.cofactor_pairs();
        let inv_det = 1.0 / (s.dot(v) + t.dot(u));
        let (s, t, u, v) = (s * inv_det, t * inv_det, u * inv_det, v * inv_det);

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Self::from_rows([
            [r0.x, r0.y, r0.z, -b.dot(t)],
            [r1.x, r1.y, r1.z, a.dot(t)],
            [r2.x, r2.y, r2.z, -d.dot(s)],
            [r3.x, r3.y, r3.z, c.dot(s)],
        ])
    }

    // With a..d the xyz of the columns and x..w their w components:
    // s = a x b, t = c x d, u = a*y - b*x, v = c*w - d*z.
    fn cofactor_pairs(&self) -> (Vec3, Vec3, Vec3, Vec3) {
        let [a, b, c, d] = self.cols.map(Vec4::xyz);
        let [x, y, z, w] = self.row(3).to_array();
        (a.cross(b), c.cross(d), a * y - b * x, c * w - d * z)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    /// Converts to glam Mat4.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // same column-major layout, no transpose
        glam::Mat4::from_cols_array_2d(&self.to_cols_array_2d())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array_2d(m.to_cols_array_2d())
    }

    #[inline]
    fn map_cols(&self, f: impl Fn(&[f32; 4]) -> [f32; 4]) -> Self {
        Self { cols: self.cols.map(|c| Vec4::from_array(f(&c.to_array()))) }
    }

    #[inline]
    fn zip_cols(&self, rhs: &Self, f: impl Fn(&[f32; 4], &[f32; 4]) -> [f32; 4]) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            out.cols[i] = Vec4::from_array(f(&self.cols[i].to_array(), &rhs.cols[i].to_array()));
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Column `i`.
impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.cols[i]
    }
}

/// Element `(row, col)`.
impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl Neg for Mat4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map_cols(simd::neg_x4)
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_cols(&rhs, simd::add_x4)
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_cols(&rhs, simd::sub_x4)
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::from_array(simd::linear_combination(&self.to_cols_array_2d(), &rhs.to_array()))
    }
}

// Mat4 * Mat4: column i of the product is self * rhs.cols[i]
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = self.to_cols_array_2d();
        rhs.map_cols(|col| simd::linear_combination(&a, col))
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map_cols(|col| simd::scale_x4(col, rhs))
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map_cols(|col| simd::div_scalar_x4(col, rhs))
    }
}

impl AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(a: [f32; 16]) -> Self {
        Self::from_cols_array(a)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> [f32; 16] {
        m.to_cols_array()
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deg_to_rad;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    // Full-rank, non-affine, no special structure.
    fn sample() -> Mat4 {
        Mat4::from_rows([
            [2.0, 0.5, 1.0, 3.0],
            [1.0, 3.0, -1.0, 0.5],
            [0.0, 1.0, 4.0, -2.0],
            [0.5, -1.0, 0.25, 1.5],
        ])
    }

    fn assert_mat_eq(a: &Mat4, b: &glam::Mat4, eps: f32) {
        let a = a.to_cols_array();
        let b = b.to_cols_array();
        for i in 0..16 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = eps);
        }
    }

    #[test]
    fn test_mat4_layout() {
        assert_eq!(std::mem::size_of::<Mat4>(), 64);
        assert_eq!(std::mem::align_of::<Mat4>(), 16);

        let m = Mat4::from_cols_array(std::array::from_fn(|i| i as f32));
        assert_eq!(m.cols[1], Vec4::new(4.0, 5.0, 6.0, 7.0));
        assert_eq!(m[(2, 1)], 6.0);
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m.row(0), Vec4::new(0.0, 4.0, 8.0, 12.0));
        assert_eq!(m.to_cols_array()[13], 13.0);
    }

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        assert_eq!(sample() * Mat4::IDENTITY, sample());
        assert_eq!(Mat4::IDENTITY * sample(), sample());
    }

    #[test]
    fn test_mat4_arithmetic() {
        let m = sample();
        assert_eq!(m + m, m * 2.0);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(m - m, Mat4::ZERO);
        assert_eq!(-m + m, Mat4::ZERO);
        assert_eq!((m * 4.0) / 4.0, m);

        let mut acc = m;
        acc += m;
        acc *= 3.0;
        acc /= 6.0;
        assert_eq!(acc, m);

        // negation flips signs, zeros included
        let neg = -Mat4::IDENTITY;
        assert_eq!(neg[(0, 0)], -1.0);
        assert!(neg[(1, 0)] == 0.0 && neg[(1, 0)].is_sign_negative());
    }

    #[test]
    fn test_mat4_mul_matches_glam() {
        let a = sample();
        let b = Mat4::create_rotation(Vec3::new(1.0, 2.0, 3.0), 0.7);
        assert_mat_eq(&(a * b), &(a.to_glam() * b.to_glam()), 1e-5);

        let v = Vec4::new(1.0, -2.0, 0.5, 1.0);
        let expected = a.to_glam() * v.to_glam();
        let actual = a * v;
        for i in 0..4 {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_mat4_transpose() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t[(0, 1)], m[(1, 0)]);
        assert_eq!(t.row(2), m.col(2));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat4_det() {
        let m = sample();
        assert_abs_diff_eq!(m.det(), m.to_glam().determinant(), epsilon = 1e-4);
        assert_eq!(Mat4::IDENTITY.det(), 1.0);
        assert_abs_diff_eq!(Mat4::create_diagonal_matrix(2.0).det(), 16.0);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = sample();
        let inv = m.inverse();

        assert_mat_eq(&(m * inv), &glam::Mat4::IDENTITY, 1e-4);
        assert_mat_eq(&inv, &m.to_glam().inverse(), 1e-4);
        assert_abs_diff_eq!(m.det() * inv.det(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_mat4_singular_inverse() {
        let mut m = sample();
        m.cols[2] = Vec4::ZERO;
        assert_eq!(m.det(), 0.0);
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_mat4_translate() {
        let m = Mat4::create_translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::point(Vec3::ONE), Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(m * Vec4::direction(Vec3::ONE), Vec4::direction(Vec3::ONE));
    }

    #[test]
    fn test_mat4_rotation_z_convention() {
        let theta = FRAC_PI_3;
        let m = Mat4::create_rotation_z(theta);

        // element (row 1, col 0) holds +sin
        assert_abs_diff_eq!(m[(1, 0)], theta.sin());
        assert_abs_diff_eq!(m[(0, 1)], -theta.sin());

        let v = m * Vec4::direction(Vec3::X);
        assert_abs_diff_eq!(v.x, theta.cos(), epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, theta.sin(), epsilon = 1e-6);

        // row-vector reading flips the sine
        let row = m.row(0);
        assert_abs_diff_eq!(row.x, theta.cos(), epsilon = 1e-6);
        assert_abs_diff_eq!(row.y, -theta.sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_rotations_match_glam() {
        let a = 0.4;
        assert_mat_eq(&Mat4::create_rotation_x(a), &glam::Mat4::from_rotation_x(a), 1e-6);
        assert_mat_eq(&Mat4::create_rotation_y(a), &glam::Mat4::from_rotation_y(a), 1e-6);
        assert_mat_eq(&Mat4::create_rotation_z(a), &glam::Mat4::from_rotation_z(a), 1e-6);

        let axis = Vec3::new(1.0, 2.0, 3.0);
        let expected = glam::Mat4::from_axis_angle(axis.normalize().to_glam(), a);
        assert_mat_eq(&Mat4::create_rotation(axis, a), &expected, 1e-6);

        // principal axes agree with the dedicated constructors
        assert_mat_eq(
            &Mat4::create_rotation(Vec3::Z, a),
            &Mat4::create_rotation_z(a).to_glam(),
            1e-6,
        );
    }

    #[test]
    fn test_mat4_look_at() {
        let eye = Vec3::new(3.0, 0.0, 3.0);
        let view = Mat4::create_look_at(eye, Vec3::ZERO, Vec3::Y);

        // target lands on -Z at the eye distance
        let target = view * Vec4::point(Vec3::ZERO);
        assert_abs_diff_eq!(target.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(target.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(target.z, -(18.0f32).sqrt(), epsilon = 1e-5);
        assert_eq!(target.w, 1.0);

        // eye lands on the origin
        let origin = view * Vec4::point(eye);
        assert_abs_diff_eq!(origin.xyz().length(), 0.0, epsilon = 1e-6);

        let expected = glam::Mat4::look_at_rh(eye.to_glam(), glam::Vec3::ZERO, glam::Vec3::Y);
        assert_mat_eq(&view, &expected, 1e-5);
    }

    #[test]
    fn test_mat4_fpp_view() {
        let eye = Vec3::new(1.0, 2.0, -4.0);
        let view = Mat4::create_fpp_view(eye, 0.3, 1.1);

        let origin = view * Vec4::point(eye);
        assert_abs_diff_eq!(origin.xyz().length(), 0.0, epsilon = 1e-5);

        // orthonormal basis: R * R^T = I
        let mut r = view;
        r.cols[3] = Vec4::W;
        assert_mat_eq(&(r * r.transpose()), &glam::Mat4::IDENTITY, 1e-6);

        // yaw 0, pitch 0: forward row is +X
        let level = Mat4::create_fpp_view(Vec3::ZERO, 0.0, 0.0);
        assert_eq!(level.row(2), Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mat4_perspective() {
        let (near, far) = (0.1, 100.0);
        let proj = Mat4::create_perspective(deg_to_rad(50.0), 1.5, near, far);

        let at_near = proj * Vec4::point(Vec3::new(0.0, 0.0, -near));
        assert_abs_diff_eq!(at_near.z / at_near.w, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(at_near.w, near, epsilon = 1e-7);

        let at_far = proj * Vec4::point(Vec3::new(0.0, 0.0, -far));
        assert_abs_diff_eq!(at_far.z / at_far.w, 1.0, epsilon = 1e-5);

        // half the fov in y maps to the top edge
        let half = deg_to_rad(25.0);
        let top = proj * Vec4::point(Vec3::new(0.0, half.tan(), -1.0));
        assert_abs_diff_eq!(top.y / top.w, 1.0, epsilon = 1e-5);

        let expected = glam::Mat4::perspective_rh(deg_to_rad(50.0), 1.5, near, far);
        assert_mat_eq(&proj, &expected, 1e-5);
        assert_eq!(proj[(3, 3)], 0.0);
        assert_eq!(proj[(3, 2)], -1.0);
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = sample();
        assert_eq!(Mat4::from_glam(m.to_glam()), m);
        let a: [f32; 16] = m.into();
        assert_eq!(Mat4::from(a), m);
    }

    #[test]
    fn test_mat4_quarter_turns_compose() {
        let quarter = Mat4::create_rotation_y(FRAC_PI_2);
        let full = quarter * quarter * quarter * quarter;
        assert_mat_eq(&full, &glam::Mat4::IDENTITY, 1e-6);
    }
}
