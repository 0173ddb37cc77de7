//! Argument building for the cty command line
//!
//! The generator's contract is positional: `generate crd -c <file>` followed
//! by optional flags in a fixed order, so the argument list is deterministic
//! and testable without spawning anything.

use std::ffi::OsString;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format of a generated sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    #[default]
    Yaml,
    Html,
}

impl SampleFormat {
    /// File extension used by the generator for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SampleFormat::Yaml => "yaml",
            SampleFormat::Html => "html",
        }
    }

    /// Value passed to the `--format` flag.
    pub fn as_str(&self) -> &'static str {
        self.extension()
    }
}

impl FromStr for SampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(SampleFormat::Yaml),
            "html" => Ok(SampleFormat::Html),
            other => Err(format!("Unknown format: {} (expected yaml or html)", other)),
        }
    }
}

/// Per-call generation options.
///
/// Immutable once constructed; passed by value into the invocation and the
/// output-path resolution, which must agree on format and output override.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Produce only the schema's minimum required fields
    pub minimal: bool,

    /// Annotate fields with schema descriptions
    pub comments: bool,

    /// Output format (default yaml)
    pub format: SampleFormat,

    /// Per-call output directory override
    pub output: Option<std::path::PathBuf>,
}

/// Build the argument list for a file-producing generation.
///
/// Flag order is fixed: minimal, comments, format (only when non-default),
/// then the output directory, which is always passed explicitly.
pub fn generate_args(source: &Path, options: &GenerateOptions, output_dir: &Path) -> Vec<OsString> {
    let mut args = base_args(source, options);

    if options.format != SampleFormat::Yaml {
        args.push("--format".into());
        args.push(options.format.as_str().into());
    }

    args.push("--output".into());
    args.push(output_dir.as_os_str().to_os_string());

    args
}

/// Build the argument list for generation onto standard output.
///
/// No `--output` is passed; the sample is captured from the process stdout.
pub fn generate_stdout_args(source: &Path, options: &GenerateOptions) -> Vec<OsString> {
    let mut args = base_args(source, options);
    args.push("--stdout".into());
    args
}

fn base_args(source: &Path, options: &GenerateOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "generate".into(),
        "crd".into(),
        "-c".into(),
        source.as_os_str().to_os_string(),
    ];

    if options.minimal {
        args.push("--minimal".into());
    }

    if options.comments {
        args.push("--comments".into());
    }

    args
}
