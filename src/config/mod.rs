//! Declarative run configuration
//!
//! A YAML [`ReconstructSpec`] names the weights and observations and carries
//! the inversion parameters; command-line flags override it.

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, InfoArgs, ReconstructArgs, ValidateArgs};
pub use loader::load_config;
pub use schema::ReconstructSpec;
pub use validate::{validate_config, validate_paths, ValidationError};
