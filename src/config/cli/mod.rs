//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! reconstruir reconstruct run.yaml
//! reconstruir reconstruct run.yaml --restarts 5 --seed 42 --parallel --output summary.json
//! reconstruir validate run.yaml --detailed
//! reconstruir info run.yaml
//! ```

mod core;


pub use self::core::{apply_overrides, parse_args, Cli, Command, InfoArgs, ReconstructArgs, ValidateArgs};
