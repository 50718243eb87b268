//! Error types for the checked entry points of cube-math.
//!
//! The arithmetic kernel never fails: singular input yields `inf`/`NaN` and
//! total internal reflection yields the zero vector. Errors only come from
//! the few checked surfaces around it:
//!
//! - [`Mat4::validate_affine`](crate::Mat4::validate_affine) - precondition
//!   check for the `*_trans` fast paths
//! - [`MatrixBlock::write_to`](crate::MatrixBlock::write_to) - packing into a
//!   caller-provided upload buffer
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for [`std::error::Error`] and [`std::fmt::Display`]

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked cube-math entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The bottom row is not `[0, 0, 0, 1]`.
    #[error("bottom row {row:?} is not [0, 0, 0, 1]")]
    NotAffine {
        /// The offending bottom row (`m(3, 0..4)`)
        row: [f32; 4],
    },

    /// Two axes of the upper-left 3x3 block are not orthogonal.
    ///
    /// The affine fast paths assume rotation and axis-aligned scale only;
    /// shear or skew makes their results silently wrong.
    #[error("axes {a} and {b} are sheared (cosine {cosine})")]
    Sheared {
        /// First column index
        a: usize,
        /// Second column index
        b: usize,
        /// Cosine of the angle between the two axes
        cosine: f32,
    },

    /// An axis of the upper-left 3x3 block has zero or non-finite length.
    #[error("axis {axis} is degenerate (squared length {length_squared})")]
    DegenerateAxis {
        /// Column index
        axis: usize,
        /// Squared length of the column
        length_squared: f32,
    },

    /// Destination buffer cannot hold the packed data.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required
        needed: usize,
        /// Bytes available
        actual: usize,
    },
}
