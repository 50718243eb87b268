//! # cube-scene
//!
//! The spinning cube: mesh data, camera, configuration and the matrices a
//! renderer uploads each frame.
//!
//! - [`CUBE_VERTICES`] / [`CUBE_INDICES`] - the coloured unit cube
//! - [`Camera`] - look-at view and perspective projection
//! - [`SceneConfig`] - YAML configuration with sensible defaults
//! - [`Scene`] / [`FrameUniforms`] - per-frame `Proj`, `View` and `Model`
//!
//! # Usage
//!
//! ```rust
//! use cube_scene::{to_ndc, Scene, SceneConfig, CUBE_VERTICES};
//!
//! let scene = Scene::from_config(&SceneConfig::default())?;
//! let frame = scene.frame(1.5);
//!
//! for vertex in CUBE_VERTICES {
//!     let ndc = to_ndc(frame.project_vertex(vertex.pos));
//!     assert!(ndc.z > 0.0 && ndc.z < 1.0);
//! }
//! # Ok::<(), cube_scene::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - `cube-math` - vectors, matrices, std140 packing
//! - [`serde`] / [`serde_yaml`] - configuration files
//! - [`tracing`] - diagnostics
//!
//! # Used By
//!
//! - `cube-cli` - `cube` command-line tool

#![warn(missing_docs)]

mod camera;
mod config;
mod error;
mod frame;
mod mesh;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use mesh::*;
