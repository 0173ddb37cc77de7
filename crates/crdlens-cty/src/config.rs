//! User configuration
//!
//! Settings are read from a YAML file (`<config-dir>/crdlens/config.yaml` by
//! default); a missing file yields the defaults. Field names follow the
//! camelCase convention of the editor-side configuration surface.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CtyError, Result};

/// Where generated samples are written when no per-call override is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLocation {
    /// The workspace root
    #[default]
    Workspace,

    /// The system temp directory
    Temp,

    /// A user-configured directory (`customOutputPath`)
    Custom,
}

/// Recognized configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Path or name of the cty executable
    #[serde(default = "default_cty_path")]
    pub cty_path: String,

    /// Offer detection on open documents automatically
    #[serde(default = "default_true", rename = "autoDetectCRDs")]
    pub auto_detect_crds: bool,

    /// Output directory policy
    #[serde(default)]
    pub output_location: OutputLocation,

    /// Directory used when `outputLocation` is `custom`
    #[serde(default)]
    pub custom_output_path: Option<PathBuf>,

    /// Report generation results to the user
    #[serde(default = "default_true")]
    pub show_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cty_path: default_cty_path(),
            auto_detect_crds: true,
            output_location: OutputLocation::default(),
            custom_output_path: None,
            show_notifications: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// An explicitly given file must exist and parse; the default file is
    /// optional and falls back to `Settings::default()` when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CtyError::InvalidConfig {
                        message: format!("Config file not found: {}", path.display()),
                    });
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// The default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("crdlens").join("config.yaml"))
    }
}

fn default_cty_path() -> String {
    "cty".to_string()
}

fn default_true() -> bool {
    true
}
