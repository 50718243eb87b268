//! std140 uniform block packing.
//!
//! A std140 `mat4` is four consecutive 16-byte columns, which is exactly the
//! memory image of [`Mat4`]. Packing a block is therefore a byte copy; this
//! module only fixes the member order and offsets and checks the destination
//! size.
//!
//! ```glsl
//! layout (std140) uniform Matrices {
//!     mat4 Proj;   // offset 0
//!     mat4 View;   // offset 64
//! };
//! ```

use bytemuck::{Pod, Zeroable};

use crate::{Error, Mat4, Result};

/// Size of a std140 `mat4` in bytes.
pub const MAT4_SIZE: usize = std::mem::size_of::<Mat4>();

/// The `Matrices` uniform block: projection then view.
///
/// # Example
///
/// ```rust
/// use cube_math::{Mat4, MatrixBlock};
///
/// let block = MatrixBlock::new(Mat4::IDENTITY, Mat4::IDENTITY);
/// let mut buf = [0u8; MatrixBlock::SIZE];
/// block.write_to(&mut buf).unwrap();
/// assert_eq!(&buf[..4], &1.0f32.to_ne_bytes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C, align(16))]
pub struct MatrixBlock {
    /// `Proj` at offset 0
    pub proj: Mat4,
    /// `View` at offset 64
    pub view: Mat4,
}

impl MatrixBlock {
    /// Block size in bytes.
    pub const SIZE: usize = 2 * MAT4_SIZE;

    /// Byte offset of `Proj`.
    pub const PROJ_OFFSET: usize = 0;

    /// Byte offset of `View`.
    pub const VIEW_OFFSET: usize = MAT4_SIZE;

    /// Creates a block.
    #[inline]
    pub const fn new(proj: Mat4, view: Mat4) -> Self {
        Self { proj, view }
    }

    /// Raw bytes in upload order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Copies the block to the start of `dst` and returns the bytes written.
    pub fn write_to(&self, dst: &mut [u8]) -> Result<usize> {
        write_bytes(dst, 0, self.as_bytes())
    }
}

/// Copies one `mat4` into `dst` at `offset`.
///
/// `offset` should be a multiple of 16 to honour std140 alignment; the
/// copy itself does not require it.
pub fn write_mat4(dst: &mut [u8], offset: usize, m: &Mat4) -> Result<usize> {
    write_bytes(dst, offset, bytemuck::bytes_of(m))
}

fn write_bytes(dst: &mut [u8], offset: usize, src: &[u8]) -> Result<usize> {
    let actual = dst.len();
    // saturates on overflow, which can never fit
    let needed = offset.saturating_add(src.len());
    let target = dst
        .get_mut(offset..needed)
        .ok_or(Error::BufferTooSmall { needed, actual })?;
    target.copy_from_slice(src);
    Ok(src.len())
}
