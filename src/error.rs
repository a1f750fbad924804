//! Error types for latent-space inversion.
//!
//! Every error carries enough context to locate the problem: shape
//! mismatches name the offending parameter and both shapes, and failures
//! during a batch reconstruction name the image they came from.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Result type alias for reconstruir operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, configuring or running an inversion.
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix or vector has the wrong dimensions.
    #[error("Shape mismatch for {what}: expected {expected:?}, got {actual:?}\n  → Check that the weights match the generator architecture")]
    ShapeMismatch {
        what: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// The measurement residual vanished, so `log(norm²)` is undefined.
    #[error("Degenerate residual at iteration {iteration}: norm = {norm}\n  → The observation is matched exactly or the output overflowed")]
    DegenerateResidual { iteration: usize, norm: f64 },

    /// Every restart ended with a NaN or infinite cost.
    #[error("No restart produced a finite cost ({restarts} tried)\n  → Try a smaller step_size")]
    NonFiniteCost { restarts: usize },

    /// A required tensor is absent from a weights or observation file.
    #[error("Missing tensor '{name}' in {path}")]
    MissingTensor { name: String, path: PathBuf },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Runtime parameter is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reconstruction of a particular image failed.
    #[error("Image {image}: {source}")]
    ImageFailed {
        image: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Build a shape mismatch error.
    pub fn shape(what: impl Into<String>, expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Attribute this error to an image index.
    pub fn for_image(self, image: usize) -> Self {
        Self::ImageFailed {
            image,
            source: Box::new(self),
        }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "E040",
            Self::DegenerateResidual { .. } => "E041",
            Self::NonFiniteCost { .. } => "E042",
            Self::MissingTensor { .. } => "E010",
            Self::ConfigParse { .. } => "E002",
            Self::Validation(_) | Self::InvalidConfig(_) => "E003",
            Self::Serialization(_) => "E051",
            Self::Io(_) => "E050",
            Self::ImageFailed { source, .. } => source.code(),
        }
    }
}
