//! Reconstruir CLI
//!
//! # Usage
//!
//! ```bash
//! # Reconstruct every image named by the config
//! reconstruir reconstruct run.yaml
//!
//! # Override the search and write a JSON summary
//! reconstruir reconstruct run.yaml --restarts 5 --seed 42 --parallel --output summary.json
//!
//! # Validate config, weights and observations
//! reconstruir validate run.yaml --detailed
//!
//! # Show generator shapes and run parameters
//! reconstruir info run.yaml
//! ```

use clap::Parser;
use reconstruir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
