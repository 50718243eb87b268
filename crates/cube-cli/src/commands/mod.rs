//! CLI command implementations

pub mod config;
pub mod frame;
pub mod inverse;
pub mod project;

use anyhow::{Context, Result};
use cube_math::Mat4;
use cube_scene::{Scene, SceneConfig};
use std::path::Path;
use tracing::{debug, info};

/// Load the config file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    match path {
        Some(path) => {
            info!("Loading config: {}", path.display());
            SceneConfig::load(path).with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => {
            debug!("No config given, using defaults");
            Ok(SceneConfig::default())
        }
    }
}

/// Build the scene, applying viewport overrides from the command line
pub fn load_scene(path: Option<&Path>, width: Option<u32>, height: Option<u32>) -> Result<Scene> {
    let mut config = load_config(path)?;
    if let Some(width) = width {
        config.viewport.width = width;
    }
    if let Some(height) = height {
        config.viewport.height = height;
    }
    Scene::from_config(&config).context("Invalid scene")
}

/// Matrix rows in math notation, one line per row
pub fn format_mat4(m: &Mat4) -> String {
    (0..4)
        .map(|i| {
            let r = m.row(i);
            format!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5} ]", r.x, r.y, r.z, r.w)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
