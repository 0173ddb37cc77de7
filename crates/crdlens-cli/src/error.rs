//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

#![allow(dead_code)] // Some variants/methods are for future use

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Target file is not YAML-eligible or does not classify as a CRD
    #[error("{message}")]
    #[diagnostic(code(crdlens::cli::input))]
    InvalidInput { message: String },

    /// The cty executable failed its availability probe
    #[error("cty executable not found: {path}")]
    #[diagnostic(
        code(crdlens::cli::unavailable),
        help(
            "Install cty (https://github.com/Skarlso/crd-to-sample-yaml#getting-started) \
             or set ctyPath in the crdlens config file"
        )
    )]
    ToolUnavailable { path: String },

    /// The generator exited non-zero or could not be spawned
    #[error("Failed to generate sample: {message}")]
    #[diagnostic(code(crdlens::cli::generation))]
    Generation { message: String },

    /// The generated sample could not be located on disk
    #[error("{message}")]
    #[diagnostic(code(crdlens::cli::output))]
    OutputResolution { message: String },

    /// Configuration file problem
    #[error("Configuration error: {message}")]
    #[diagnostic(code(crdlens::cli::config))]
    Config { message: String },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(crdlens::cli::io))]
    Io { message: String },

    /// Wrapped error for passthrough (stores the formatted message)
    #[error("{message}")]
    #[diagnostic(code(crdlens::cli::error))]
    Other { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::ToolUnavailable { .. } => exit_codes::TOOL_UNAVAILABLE,
            CliError::Generation { .. } => exit_codes::GENERATION_ERROR,
            CliError::OutputResolution { .. } => exit_codes::OUTPUT_ERROR,
            CliError::Config { .. } => exit_codes::ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Other { .. } => exit_codes::ERROR,
        }
    }

    /// Create an invalid-input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<crdlens_core::CoreError> for CliError {
    fn from(err: crdlens_core::CoreError) -> Self {
        // Both core variants are filesystem-shaped
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<crdlens_cty::CtyError> for CliError {
    fn from(err: crdlens_cty::CtyError) -> Self {
        use crdlens_cty::CtyError;

        match &err {
            CtyError::Unavailable { path } => CliError::ToolUnavailable { path: path.clone() },
            CtyError::Spawn { .. } | CtyError::Generation { .. } => CliError::Generation {
                message: err.to_string(),
            },
            CtyError::OutputMissing { .. } => CliError::OutputResolution {
                message: err.to_string(),
            },
            CtyError::InvalidConfig { .. } | CtyError::ConfigParse(_) => CliError::Config {
                message: err.to_string(),
            },
            CtyError::Io(_) => CliError::Io {
                message: err.to_string(),
            },
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
