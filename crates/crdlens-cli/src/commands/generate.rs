//! Generate command - drive the external generator for one CRD file
//!
//! Precondition checks (file eligibility, classification, generator
//! availability) happen here before anything is spawned; the invocation
//! layer trusts its caller. After a successful run the sample's location is
//! re-derived from disk and searched for, never assumed.

use std::path::{Path, PathBuf};

use crdlens_core::{classify, is_eligible_file};
use crdlens_cty::{
    find_generated_sample, resolve_output_dir, sample_path, CtyClient, GenerateOptions,
    SampleFormat, Settings,
};

use crate::display::Reporter;
use crate::error::{CliError, Result};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    file: &Path,
    minimal: bool,
    comments: bool,
    format: &str,
    output: Option<PathBuf>,
    to_stdout: bool,
    workspace_root: Option<&Path>,
    settings: &Settings,
    reporter: Reporter,
) -> Result<()> {
    let format: SampleFormat = format.parse().map_err(CliError::input)?;

    if !is_eligible_file(file) {
        return Err(CliError::input(format!(
            "{} is not a valid YAML file",
            file.display()
        )));
    }

    let raw = std::fs::read_to_string(file)?;
    if classify(&raw).is_none() {
        return Err(CliError::input(format!(
            "{} does not appear to be a CRD",
            file.display()
        )));
    }

    let client = CtyClient::from_settings(settings);
    if !client.available().await {
        return Err(CliError::ToolUnavailable {
            path: settings.cty_path.clone(),
        });
    }

    let options = GenerateOptions {
        minimal,
        comments,
        format,
        output,
    };

    if to_stdout {
        let sample = client.generate_to_string(file, &options).await?;
        print!("{}", sample);
        return Ok(());
    }

    let output_dir = resolve_output_dir(&options, settings, workspace_root, file);

    reporter.step(&format!("Generating sample for {}", file.display()));
    client.generate(file, &options, &output_dir).await?;

    let expected = sample_path(file, &options, &output_dir);
    let found = find_generated_sample(&expected)?;

    let name = found
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| found.display().to_string());
    reporter.success(&format!("Sample generated: {}", name));
    println!("{}", found.display());

    Ok(())
}
