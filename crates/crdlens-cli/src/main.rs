//! Crdlens CLI - CRD detection and sample generation via the cty generator

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crdlens_cty::Settings;

mod commands;
mod display;
mod error;
mod exit_codes;
mod state;

use display::Reporter;

#[derive(Parser)]
#[command(name = "crdlens")]
#[command(version)]
#[command(about = "Detect CustomResourceDefinitions and generate sample manifests", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress status output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a YAML file as a CRD and show its metadata
    Detect {
        /// File to classify
        file: PathBuf,

        /// Output the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find CRD documents under a directory
    Scan {
        /// Root directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Locate the spec/versions lines used for editor lens placement
    Lines {
        /// File to scan
        file: PathBuf,

        /// Output the line numbers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a sample manifest for a CRD file
    Generate {
        /// CRD file to generate a sample for
        file: PathBuf,

        /// Produce only the schema's minimum required fields
        #[arg(long)]
        minimal: bool,

        /// Annotate fields with schema descriptions
        #[arg(long)]
        comments: bool,

        /// Output format (yaml or html)
        #[arg(long, default_value = "yaml")]
        format: String,

        /// Output directory (overrides the configured location)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the sample on standard output instead of a file
        #[arg(long)]
        stdout: bool,

        /// Workspace root for the configured workspace output location
        #[arg(long)]
        workspace_root: Option<PathBuf>,
    },

    /// Validate a sample manifest against its CRD
    Validate {
        /// Sample file to validate
        sample: PathBuf,

        /// CRD file the sample should conform to
        crd: PathBuf,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },
}

// Each request is a sequential chain of suspending steps; a single-threaded
// runtime is all the concurrency this workflow has.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => exit_with(error::CliError::config(err.to_string())),
    };

    let reporter = Reporter::new(cli.quiet, settings.show_notifications);

    // Keep the welcome notice out of machine-readable output
    let machine_output = matches!(
        &cli.command,
        Commands::Detect { json: true, .. }
            | Commands::Scan { json: true, .. }
            | Commands::Lines { json: true, .. }
            | Commands::Validate { json: true, .. }
            | Commands::Generate { stdout: true, .. }
    );

    if !machine_output && state::first_run() {
        reporter.step("crdlens ready. Run `crdlens detect <file>` on CRD files to get started.");
    }

    let result = match cli.command {
        Commands::Detect { file, json } => commands::detect::run(&file, json, reporter),

        Commands::Scan { root, json } => commands::scan::run(&root, json, reporter),

        Commands::Lines { file, json } => commands::lines::run(&file, json),

        Commands::Generate {
            file,
            minimal,
            comments,
            format,
            output,
            stdout,
            workspace_root,
        } => {
            commands::generate::run(
                &file,
                minimal,
                comments,
                &format,
                output,
                stdout,
                workspace_root.as_deref(),
                &settings,
                reporter,
            )
            .await
        }

        Commands::Validate { sample, crd, json } => {
            commands::validate::run(&sample, &crd, json, reporter)
        }
    };

    if let Err(err) = result {
        exit_with(err);
    }
}

fn exit_with(err: error::CliError) -> ! {
    let code = err.exit_code();
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(code);
}
