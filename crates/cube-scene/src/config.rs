//! Scene configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the classic setup: a unit cube shifted slightly left, spinning about
//! Z once per 2π seconds, seen from (3, 0, 3) through a 50° lens.
//!
//! ```yaml
//! camera:
//!   eye: [3.0, 0.0, 3.0]
//!   target: [0.0, 0.0, 0.0]
//!   up: [0.0, 1.0, 0.0]
//!   fov_degrees: 50.0
//!   near: 0.1
//!   far: 100.0
//! viewport:
//!   width: 1200
//!   height: 1200
//! model:
//!   translation: [-0.33, 0.0, 0.0]
//!   spin_rate: 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Top-level scene configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Camera placement and lens
    pub camera: CameraConfig,
    /// Framebuffer size
    pub viewport: ViewportConfig,
    /// Cube placement and animation
    pub model: ModelConfig,
}

/// Camera placement and lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position
    pub eye: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Approximate up direction
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [3.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 50.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Framebuffer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ViewportConfig {
    /// Width / height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1200, height: 1200 }
    }
}

/// Cube placement and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Translation applied after the spin
    pub translation: [f32; 3],
    /// Spin about Z in radians per second
    pub spin_rate: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            translation: [-0.33, 0.0, 0.0],
            spin_rate: 1.0,
        }
    }
}

impl SceneConfig {
    /// Loads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading scene config");

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the values a camera and viewport need to produce finite
    /// matrices.
    pub fn validate(&self) -> Result<()> {
        let cam = &self.camera;

        if !(cam.near > 0.0) {
            return Err(Error::InvalidConfig(format!("near must be positive, got {}", cam.near)));
        }
        if !(cam.far > cam.near) {
            return Err(Error::InvalidConfig(format!(
                "far ({}) must be greater than near ({})",
                cam.far, cam.near
            )));
        }
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}",
                cam.fov_degrees
            )));
        }
        if cam.eye == cam.target {
            return Err(Error::InvalidConfig("eye and target coincide".into()));
        }
        if cam.up == [0.0; 3] {
            return Err(Error::InvalidConfig("up must be non-zero".into()));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if !self.model.spin_rate.is_finite() {
            return Err(Error::InvalidConfig("spin_rate must be finite".into()));
        }

        Ok(())
    }
}
