//! # cube-math
//!
//! Linear algebra kernel for a real-time rasterizing renderer.
//!
//! This crate provides the math a render loop needs every frame:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - fixed-size `f32` vectors sharing the
//!   [`Vector`] operation set (length, normalize, reflect, refract, projection)
//! - [`Mat4`] - column-major 4x4 matrices with camera and projection
//!   constructors, determinant and inverse
//! - Affine fast paths ([`Mat4::mul_trans`], [`Mat4::inverse_trans`], ...)
//!   for rotation/scale/translation matrices
//! - Scalar helpers (clamp, lerp, angle wrapping, rounding to `i32`)
//! - [`MatrixBlock`] - std140 packing of the projection/view uniform block
//!
//! # Design
//!
//! All types are plain `Copy` values with a GPU-compatible memory layout
//! ([`bytemuck::Pod`]). Matrices are **column-major** and use **column
//! vectors**:
//!
//! ```text
//! clip = proj * view * model * vertex
//! ```
//!
//! The 4-wide paths go through the [`simd`] module, built on
//! [`wide::f32x4`]. The kernel never allocates, never logs and never fails:
//! singular input yields `inf`/`NaN` rather than an error.
//!
//! # Usage
//!
//! ```rust
//! use cube_math::{deg_to_rad, Mat4, Vec3, Vec4, Vector};
//!
//! let model = Mat4::create_translate(Vec3::new(-0.33, 0.0, 0.0)) * Mat4::create_rotation_z(0.5);
//! let view = Mat4::create_look_at(Vec3::new(3.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::create_perspective(deg_to_rad(50.0), 1.0, 0.1, 100.0);
//!
//! let clip = proj * view * model * Vec4::point(Vec3::new(0.5, 0.5, 0.5));
//! let ndc = clip.xyz() / clip.w;
//! assert!(ndc.z > 0.0 && ndc.z < 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`wide`] - portable 4-lane SIMD
//! - [`bytemuck`] - zero-copy casts for GPU upload
//! - [`glam`] - interop conversions
//! - [`thiserror`] - error types
//!
//! # Used By
//!
//! - `cube-scene` - cube mesh, camera and per-frame uniforms
//! - `cube-cli` - matrix inspection commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod error;
mod mat4;
mod scalar;
mod uniform;
mod vec2;
mod vec3;
mod vec4;
mod vector;
pub mod simd;

pub use affine::*;
pub use error::*;
pub use mat4::*;
pub use scalar::*;
pub use uniform::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
pub use vector::*;
