//! Saving generator weights, observation sets and run summaries

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::observations::ObservationSet;
use super::summary::RunSummary;
use super::tensors::{RawTensor, TensorFile};
use super::{A1, A2, B1, B2, X_IDEAL, X_NOISY};
use crate::inversion::Generator;
use crate::{Error, Result};

/// Save generator weights under `A_1`, `B_1`, `A_2`, `B_2`
///
/// # Example
///
/// ```no_run
/// use reconstruir::inversion::{Generator, GeneratorConfig};
/// use reconstruir::io::save_generator;
///
/// let generator = Generator::with_seed(GeneratorConfig::default(), 42);
/// save_generator(&generator, "weights.safetensors").unwrap();
/// ```
pub fn save_generator(generator: &Generator, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let weights = generator.weights();
    let mut file = TensorFile::new(path);
    file.insert(A1, RawTensor::from_matrix(&weights.a1));
    file.insert(B1, RawTensor::from_vector(&weights.b1));
    file.insert(A2, RawTensor::from_matrix(&weights.a2));
    file.insert(B2, RawTensor::from_vector(&weights.b2));
    file.write(path)
}

/// Save an observation set under `X_n` and, when present, `X_i`.
pub fn save_observations(set: &ObservationSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = TensorFile::new(path);
    file.insert(X_NOISY, RawTensor::from_matrix(set.noisy_matrix()));
    if let Some(ideal) = set.ideal_matrix() {
        file.insert(X_IDEAL, RawTensor::from_matrix(ideal));
    }
    file.write(path)
}

/// Write a run summary as pretty JSON
pub fn save_summary(summary: &RunSummary, path: impl AsRef<Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(summary)
        .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inversion::{GeneratorConfig, LatentCode};
    use crate::io::summary::ImageSummary;
    use crate::io::{load_generator, load_observations};
    use ndarray::array;
    use tempfile::NamedTempFile;

    fn generator() -> Generator {
        Generator::with_seed(
            GeneratorConfig {
                latent_dim: 2,
                hidden_dim: 3,
                output_dim: 4,
            },
            11,
        )
    }

    #[test]
    fn test_generator_survives_every_format() {
        let original = generator();
        let z = LatentCode::new(vec![0.3, -0.2]);
        let expected = original.forward(&z).unwrap().output;

        for suffix in [".json", ".yaml", ".safetensors"] {
            let file = NamedTempFile::with_suffix(suffix).unwrap();
            save_generator(&original, file.path()).unwrap();
            let loaded = load_generator(file.path()).unwrap();
            assert_eq!(loaded.config(), original.config());
            let output = loaded.forward(&z).unwrap().output;
            for (a, b) in output.iter().zip(expected.iter()) {
                approx::assert_abs_diff_eq!(a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_save_observations_keeps_ideal() {
        let set = ObservationSet::new(
            array![[0.1, 0.2], [0.3, 0.4]],
            Some(array![[1.0, 2.0], [3.0, 4.0]]),
        )
        .unwrap();
        let file = NamedTempFile::with_suffix(".safetensors").unwrap();
        save_observations(&set, file.path()).unwrap();

        assert_eq!(load_observations(file.path()).unwrap(), set);
    }

    #[test]
    fn test_save_summary_json() {
        let summary = RunSummary {
            step_size: 0.01,
            iterations: 10,
            restarts: 2,
            observed: 2,
            seed: Some(7),
            images: vec![ImageSummary {
                image: 0,
                best_restart: 1,
                final_cost: -3.5,
                restart_costs: vec![-1.0, -3.5],
                latent: vec![0.1, 0.2],
                reconstruction: vec![0.5; 4],
                mse: None,
            }],
        };
        let file = NamedTempFile::with_suffix(".json").unwrap();
        save_summary(&summary, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: RunSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_save_unknown_extension() {
        let file = NamedTempFile::with_suffix(".bin").unwrap();
        assert!(matches!(
            save_generator(&generator(), file.path()),
            Err(Error::Serialization(_))
        ));
    }
}
