//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ReconstructSpec;

/// Reconstruir: image reconstruction by generator inversion
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "reconstruir")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Reconstruct partially observed images by inverting a fixed generator")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Reconstruct every selected image of a YAML configuration
    Reconstruct(ReconstructArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),

    /// Display generator shapes and run parameters
    Info(InfoArgs),
}

/// Arguments for the reconstruct command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReconstructArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override number of restarts
    #[arg(short, long)]
    pub restarts: Option<usize>,

    /// Override iterations per restart
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Override step size
    #[arg(short, long)]
    pub step_size: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run restarts in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Write a JSON summary of the run
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Also load the weights and observations and check their shapes
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ReconstructSpec
pub fn apply_overrides(spec: &mut ReconstructSpec, args: &ReconstructArgs) {
    if let Some(restarts) = args.restarts {
        spec.inversion.restarts = restarts;
    }
    if let Some(iterations) = args.iterations {
        spec.inversion.iterations = iterations;
    }
    if let Some(step_size) = args.step_size {
        spec.inversion.step_size = step_size;
    }
    if let Some(seed) = args.seed {
        spec.inversion.seed = Some(seed);
    }
    if args.parallel {
        spec.inversion.parallel = true;
    }
}
