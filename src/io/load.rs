//! Loading generator weights and observation sets

use std::path::Path;

use super::observations::ObservationSet;
use super::tensors::TensorFile;
use super::{A1, A2, B1, B2, X_IDEAL, X_NOISY};
use crate::inversion::{Generator, GeneratorWeights};
use crate::Result;

/// Load generator weights from a file
///
/// The file must hold `A_1` (hidden × latent), `B_1` (hidden), `A_2`
/// (output × hidden) and `B_2` (output). Format is detected from the
/// extension.
///
/// # Example
///
/// ```no_run
/// use reconstruir::io::load_generator;
///
/// let generator = load_generator("weights.safetensors").unwrap();
/// println!("latent dim: {}", generator.latent_dim());
/// ```
pub fn load_generator(path: impl AsRef<Path>) -> Result<Generator> {
    let file = TensorFile::read(path)?;
    Generator::new(GeneratorWeights {
        a1: file.matrix(A1)?,
        b1: file.vector(B1)?,
        a2: file.matrix(A2)?,
        b2: file.vector(B2)?,
    })
}

/// Load an observation set: `X_n` is required, `X_i` optional.
pub fn load_observations(path: impl AsRef<Path>) -> Result<ObservationSet> {
    let file = TensorFile::read(path)?;
    let noisy = file.matrix(X_NOISY)?;
    let ideal = if file.contains(X_IDEAL) {
        Some(file.matrix(X_IDEAL)?)
    } else {
        None
    };
    ObservationSet::new(noisy, ideal)
}
