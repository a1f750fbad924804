//! Configuration validation
//!
//! Validates reconstruction specifications before any file is loaded.

mod error;
mod validator;


pub use error::ValidationError;
pub use validator::{validate_config, validate_paths};
