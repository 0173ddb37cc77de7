//! Error types for generator invocation and output resolution

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtyError {
    #[error("cty executable not available: {path}")]
    Unavailable { path: String },

    #[error("Failed to spawn {path}: {message}")]
    Spawn { path: String, message: String },

    #[error("cty execution failed: {stderr}")]
    Generation { stderr: String },

    #[error(
        "Generated sample not found at {}. Files in {}: {}",
        expected.display(),
        dir.display(),
        found.join(", ")
    )]
    OutputMissing {
        expected: PathBuf,
        dir: PathBuf,
        found: Vec<String>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CtyError>;
