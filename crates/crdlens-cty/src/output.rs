//! Output directory policy and sample path resolution
//!
//! The generator names its output after the CRD's declared kind, a
//! convention this module predicts rather than controls. Resolution is a
//! separate operation from invocation: it re-reads the source file at call
//! time, because the file may have changed between detection and
//! generation, and it tolerates the prediction being wrong via a substring
//! search over the output directory.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::command::GenerateOptions;
use crate::config::{OutputLocation, Settings};
use crate::error::{CtyError, Result};

/// Pick the output directory for one invocation.
///
/// Priority: the per-call `output` override, then the configured location,
/// then the directory containing the source file. Exactly one directory is
/// chosen; the result is made absolute so the generator never falls back to
/// writing next to its own binary.
pub fn resolve_output_dir(
    options: &GenerateOptions,
    settings: &Settings,
    workspace_root: Option<&Path>,
    source: &Path,
) -> PathBuf {
    let source_dir = || {
        source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let dir = if let Some(output) = &options.output {
        output.clone()
    } else {
        match settings.output_location {
            OutputLocation::Workspace => workspace_root.map(Path::to_path_buf).unwrap_or_else(source_dir),
            OutputLocation::Temp => std::env::temp_dir(),
            OutputLocation::Custom => settings
                .custom_output_path
                .clone()
                .filter(|p| !p.as_os_str().is_empty())
                .or_else(|| workspace_root.map(Path::to_path_buf))
                .unwrap_or_else(source_dir),
        }
    };

    std::path::absolute(&dir).unwrap_or(dir)
}

/// The kind the generator will use for the output filename.
///
/// Re-reads the CRD file at call time; a stale in-memory classification must
/// not leak into output naming. Returns `None` when the file cannot be read
/// or does not carry `spec.names.kind`.
pub fn kind_for_naming(crd_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(crd_path).ok()?;
    let doc: Value = serde_yaml::from_str(&content).ok()?;

    doc.get("spec")
        .and_then(|s| s.get("names"))
        .and_then(|n| n.get("kind"))
        .and_then(Value::as_str)
        .map(String::from)
}

/// Predict the path of the generated sample: `<dir>/<Kind>_sample.<ext>`.
///
/// When the CRD file cannot be re-read or re-parsed, the source file's stem
/// stands in for the kind.
pub fn sample_path(crd_path: &Path, options: &GenerateOptions, output_dir: &Path) -> PathBuf {
    let stem = kind_for_naming(crd_path).unwrap_or_else(|| {
        crd_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "crd".to_string())
    });

    output_dir.join(format!("{}_sample.{}", stem, options.format.extension()))
}

/// Locate the generated sample, tolerating a mismatched naming convention.
///
/// Two phases: an exact check on the predicted path, then a listing of the
/// output directory filtered to names containing `"_sample."` or
/// `"sample."`, taking the first match in listing order. No match is an
/// error carrying both the prediction and the directory's actual contents.
pub fn find_generated_sample(expected: &Path) -> Result<PathBuf> {
    if expected.exists() {
        return Ok(expected.to_path_buf());
    }

    let dir = expected.parent().unwrap_or_else(|| Path::new("."));
    tracing::debug!(
        "Predicted sample {} missing, searching {}",
        expected.display(),
        dir.display()
    );

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        // Covers both the `<Kind>_sample.` convention and bare `sample.` names
        if name.contains("_sample.") || name.contains("sample.") {
            return Ok(entry.path());
        }

        found.push(name);
    }

    Err(CtyError::OutputMissing {
        expected: expected.to_path_buf(),
        dir: dir.to_path_buf(),
        found,
    })
}
