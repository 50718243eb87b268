//! Per-frame matrix setup.
//!
//! Each frame the renderer needs three matrices:
//!
//! - `Proj` and `View` in the std140 `Matrices` block ([`MatrixBlock`])
//! - `Model` as a separate `mat4` uniform
//!
//! The vertex shader computes `Proj * View * Model * vec4(pos, 1)`.
//! [`FrameUniforms::project_vertex`] does the same on the CPU.

use cube_math::{AFFINE_TOLERANCE, Mat4, MatrixBlock, Vec3, Vec4};
use tracing::{debug, trace};

use crate::{Camera, Result, SceneConfig, ViewportConfig};

/// The spinning cube scene.
///
/// # Example
///
/// ```rust
/// use cube_scene::{Scene, SceneConfig};
///
/// let scene = Scene::from_config(&SceneConfig::default()).unwrap();
/// let frame = scene.frame(0.0);
/// assert_eq!(frame.model.get_translation().x, -0.33);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Camera
    pub camera: Camera,
    /// Framebuffer size
    pub viewport: ViewportConfig,
    /// Model translation applied after the spin
    pub translation: Vec3,
    /// Spin about Z in radians per second
    pub spin_rate: f32,
}

impl Scene {
    /// Validates `config` and builds the scene from it.
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let scene = Self {
            camera: Camera::from_config(&config.camera),
            viewport: config.viewport,
            translation: Vec3::from_array(config.model.translation),
            spin_rate: config.model.spin_rate,
        };
        debug!(
            width = scene.viewport.width,
            height = scene.viewport.height,
            spin_rate = scene.spin_rate,
            "scene ready"
        );
        Ok(scene)
    }

    /// Updates the framebuffer size. Zero sizes (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            trace!(width, height, "ignoring empty framebuffer");
            return;
        }
        self.viewport = ViewportConfig { width, height };
    }

    /// Model matrix at `time` seconds: spin about Z, then translate.
    pub fn model(&self, time: f32) -> Mat4 {
        let translate = Mat4::create_translate(self.translation);
        let rotation = Mat4::create_rotation_z(time * self.spin_rate);
        translate.mul_trans(&rotation)
    }

    /// All matrices for the frame at `time` seconds.
    pub fn frame(&self, time: f32) -> FrameUniforms {
        trace!(time, "frame");
        FrameUniforms {
            proj: self.camera.projection(self.viewport.aspect()),
            view: self.camera.view(),
            model: self.model(time),
        }
    }
}

/// Matrices uploaded for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// View-to-clip
    pub proj: Mat4,
    /// World-to-view
    pub view: Mat4,
    /// Object-to-world
    pub model: Mat4,
}

impl FrameUniforms {
    /// The std140 `Matrices` block (`Proj`, `View`).
    pub fn matrices(&self) -> MatrixBlock {
        MatrixBlock::new(self.proj, self.view)
    }

    /// Combined `proj * view * model`.
    pub fn mvp(&self) -> Mat4 {
        self.proj * self.view.mul_trans(&self.model)
    }

    /// Object-space position to clip space.
    pub fn project_vertex(&self, pos: Vec3) -> Vec4 {
        self.mvp() * Vec4::point(pos)
    }

    /// Object-to-world transform for normals: inverse transpose of the
    /// model's 3x3 block, up to scale.
    pub fn normal_matrix(&self) -> Mat4 {
        self.model.adjugate_trans().transpose()
    }

    /// World-to-object matrix.
    ///
    /// Checks the model is affine first, since the fast inverse gives wrong
    /// results otherwise.
    pub fn inverse_model(&self) -> Result<Mat4> {
        self.model.validate_affine(AFFINE_TOLERANCE)?;
        Ok(self.model.inverse_trans())
    }
}

/// Perspective divide: clip space to normalized device coordinates.
///
/// Visible points land in `[-1, 1]` for x and y and `[0, 1]` for z.
pub fn to_ndc(clip: Vec4) -> Vec3 {
    clip.xyz() / clip.w
}
