//! Crdlens Cty - integration with the external `cty` sample generator
//!
//! The sample-generation algorithm itself lives in the `cty` executable;
//! this crate owns everything around invoking it:
//! - `Settings`: user configuration (executable path, output policy)
//! - `GenerateOptions`: per-call generation options and argument building
//! - `CtyClient`: availability probe and subprocess invocation
//! - `output`: predicting where the generated sample landed, with a
//!   fallback directory search when the prediction misses
//!
//! The generator writes next to its own binary when no output directory is
//! given; every file-producing invocation therefore passes an explicit
//! absolute `--output` argument.

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod output;

pub use client::CtyClient;
pub use command::{generate_args, generate_stdout_args, GenerateOptions, SampleFormat};
pub use config::{OutputLocation, Settings};
pub use error::{CtyError, Result};
pub use output::{find_generated_sample, kind_for_naming, resolve_output_dir, sample_path};
