//! Validation error types
//!
//! Defines all validation error variants for reconstruction specifications.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Generator weights file does not exist: {0}")]
    GeneratorNotFound(String),

    #[error("Observations file does not exist: {0}")]
    ObservationsNotFound(String),

    #[error("Invalid step size: {0} (must be > 0.0 and finite)")]
    InvalidStepSize(f64),

    #[error("Invalid iterations: {0} (must be > 0)")]
    InvalidIterations(usize),

    #[error("Invalid restarts: {0} (must be > 0)")]
    InvalidRestarts(usize),

    #[error("Invalid observed pixel count: {0} (must be > 0)")]
    InvalidObserved(usize),

    #[error("Image selection cannot be empty")]
    EmptyImageSelection,

    #[error("Image {0} is selected more than once")]
    DuplicateImage(usize),
}
