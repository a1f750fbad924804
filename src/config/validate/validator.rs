//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::ReconstructSpec;

/// Validate the numeric parameters of a specification
///
/// Checks:
/// - step size is positive and finite
/// - iteration, restart and observed counts are nonzero
/// - an explicit image selection is non-empty and has no duplicates
pub fn validate_config(spec: &ReconstructSpec) -> Result<(), ValidationError> {
    let inversion = &spec.inversion;

    if !(inversion.step_size.is_finite() && inversion.step_size > 0.0) {
        return Err(ValidationError::InvalidStepSize(inversion.step_size));
    }

    if inversion.iterations == 0 {
        return Err(ValidationError::InvalidIterations(inversion.iterations));
    }

    if inversion.restarts == 0 {
        return Err(ValidationError::InvalidRestarts(inversion.restarts));
    }

    if spec.observed == 0 {
        return Err(ValidationError::InvalidObserved(spec.observed));
    }

    if let Some(images) = &spec.images {
        if images.is_empty() {
            return Err(ValidationError::EmptyImageSelection);
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(&dup) = images.iter().find(|&&i| !seen.insert(i)) {
            return Err(ValidationError::DuplicateImage(dup));
        }
    }

    Ok(())
}

/// Check that the referenced weight and observation files exist
pub fn validate_paths(spec: &ReconstructSpec) -> Result<(), ValidationError> {
    if !spec.generator.exists() {
        return Err(ValidationError::GeneratorNotFound(
            spec.generator.display().to_string(),
        ));
    }
    if !spec.observations.exists() {
        return Err(ValidationError::ObservationsNotFound(
            spec.observations.display().to_string(),
        ));
    }
    Ok(())
}
