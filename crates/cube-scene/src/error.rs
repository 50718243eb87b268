//! Error types for scene configuration and frame setup.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or using a scene.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parse or serialize error.
    #[error("YAML error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Config parsed but holds values no camera or viewport can use.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Math kernel rejected a matrix or buffer.
    #[error(transparent)]
    Math(#[from] cube_math::Error),
}
