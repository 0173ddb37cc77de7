//! Subprocess invocation of the cty generator
//!
//! Every invocation uses the argument-array form of `tokio::process::Command`
//! so file paths are never re-interpreted by a shell. One process per call;
//! no pooling, no retries, no timeout - an unresponsive generator blocks only
//! the request that spawned it.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::command::{generate_args, generate_stdout_args, GenerateOptions};
use crate::config::Settings;
use crate::error::{CtyError, Result};

/// Handle on the external generator executable.
#[derive(Debug, Clone)]
pub struct CtyClient {
    path: PathBuf,
}

impl CtyClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.cty_path)
    }

    /// The executable path this client invokes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probe availability by running `<cty> version`.
    ///
    /// A zero exit means available; spawn failures and non-zero exits both
    /// read as unavailable.
    pub async fn available(&self) -> bool {
        Command::new(&self.path)
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Run a file-producing generation for `source`.
    ///
    /// The sample lands in `output_dir` under the generator's own naming
    /// convention; the caller resolves the actual path afterwards (see
    /// [`crate::output`]). Returns captured stdout, which the generator may
    /// leave empty on this path.
    pub async fn generate(
        &self,
        source: &Path,
        options: &GenerateOptions,
        output_dir: &Path,
    ) -> Result<String> {
        let source = std::path::absolute(source)?;
        let output_dir = std::path::absolute(output_dir)?;
        let args = generate_args(&source, options, &output_dir);
        self.run(args).await
    }

    /// Run a generation that emits the sample on standard output.
    pub async fn generate_to_string(
        &self,
        source: &Path,
        options: &GenerateOptions,
    ) -> Result<String> {
        let args = generate_stdout_args(source, options);
        self.run(args).await
    }

    async fn run(&self, args: Vec<std::ffi::OsString>) -> Result<String> {
        tracing::debug!(
            "Executing: {} {}",
            self.path.display(),
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.path)
            .args(&args)
            .output()
            .await
            .map_err(|e| CtyError::Spawn {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!("cty exited with {}: {}", output.status, stderr.trim());
            return Err(CtyError::Generation { stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
