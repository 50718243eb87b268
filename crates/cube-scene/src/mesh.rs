//! Cube mesh: eight coloured corners and twelve triangles.
//!
//! Corner colours equal the corner position remapped from `[-1, 1]` to
//! `[0, 1]`, so the cube shows an RGB gradient. Triangles wind
//! counter-clockwise seen from outside.

use bytemuck::{Pod, Zeroable};
use cube_math::Vec3;

/// Interleaved vertex as uploaded to the vertex buffer.
///
/// 24 bytes: `pos` at offset 0 (`location = 0`), `col` at offset 12
/// (`location = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Object-space position
    pub pos: Vec3,
    /// RGB colour
    pub col: Vec3,
}

impl Vertex {
    /// Creates a vertex.
    pub const fn new(pos: [f32; 3], col: [f32; 3]) -> Self {
        Self {
            pos: Vec3::from_array(pos),
            col: Vec3::from_array(col),
        }
    }
}

/// The eight cube corners, half-extent 1 around the origin.
pub const CUBE_VERTICES: [Vertex; 8] = [
    Vertex::new([-1.0, -1.0, -1.0], [0.0, 0.0, 0.0]),
    Vertex::new([-1.0, 1.0, -1.0], [0.0, 1.0, 0.0]),
    Vertex::new([1.0, 1.0, -1.0], [1.0, 1.0, 0.0]),
    Vertex::new([1.0, -1.0, -1.0], [1.0, 0.0, 0.0]),
    Vertex::new([-1.0, -1.0, 1.0], [0.0, 0.0, 1.0]),
    Vertex::new([-1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
    Vertex::new([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    Vertex::new([1.0, -1.0, 1.0], [1.0, 0.0, 1.0]),
];

/// Triangle list indices into [`CUBE_VERTICES`], two triangles per face.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // -Z
    4, 6, 5, 4, 7, 6, // +Z
    4, 5, 1, 4, 1, 0, // -X
    3, 2, 6, 3, 6, 7, // +X
    1, 5, 6, 1, 6, 2, // +Y
    4, 0, 3, 4, 3, 7, // -Y
];

/// Iterates the triangles of [`CUBE_INDICES`] as vertex triples.
pub fn cube_triangles() -> impl Iterator<Item = [Vertex; 3]> {
    CUBE_INDICES.chunks_exact(3).map(|tri| {
        [
            CUBE_VERTICES[tri[0] as usize],
            CUBE_VERTICES[tri[1] as usize],
            CUBE_VERTICES[tri[2] as usize],
        ]
    })
}
