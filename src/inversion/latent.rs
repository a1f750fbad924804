//! Latent code: the optimization variable of an inversion run.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Latent code representation (column vector in latent space)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatentCode {
    /// The latent vector
    pub vector: Array1<f64>,
}

impl LatentCode {
    /// Create a new latent code from a vector
    #[must_use]
    pub fn new(vector: impl Into<Array1<f64>>) -> Self {
        Self {
            vector: vector.into(),
        }
    }

    /// All-zero latent code
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            vector: Array1::zeros(dim),
        }
    }

    /// Sample from standard normal distribution using Box-Muller transform
    pub fn sample<R: Rng>(rng: &mut R, dim: usize) -> Self {
        let vector: Array1<f64> = (0..dim).map(|_| standard_normal(rng)).collect();
        Self { vector }
    }

    /// Dimension of the latent code
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Squared L2 norm ‖Z‖²
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.vector.dot(&self.vector)
    }

    /// L2 norm
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Gradient step in place: Z ← Z − step·grad
    pub fn descend(&mut self, step_size: f64, grad: &Array1<f64>) {
        self.vector.scaled_add(-step_size, grad);
    }
}

/// Standard normal sample using the Box-Muller transform.
///
/// Shared by latent sampling and generator weight initialization.
pub(crate) fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_latent_code_creation() {
        let code = LatentCode::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(code.dim(), 3);
        assert_eq!(code.vector.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_latent_code_sample_is_seeded() {
        let mut a = rand::rngs::StdRng::seed_from_u64(42);
        let mut b = rand::rngs::StdRng::seed_from_u64(42);
        let za = LatentCode::sample(&mut a, 10);
        let zb = LatentCode::sample(&mut b, 10);
        assert_eq!(za.dim(), 10);
        assert_eq!(za, zb);
    }

    #[test]
    fn test_sample_uses_standard_normal() {
        let mut a = rand::rngs::StdRng::seed_from_u64(3);
        let mut b = rand::rngs::StdRng::seed_from_u64(3);
        let z = LatentCode::sample(&mut a, 4);
        let expected: Vec<f64> = (0..4).map(|_| standard_normal(&mut b)).collect();
        assert_eq!(z.vector.to_vec(), expected);
    }

    #[test]
    fn test_latent_code_sample_moments() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let z = LatentCode::sample(&mut rng, 20_000);
        let n = z.dim() as f64;
        let mean = z.vector.sum() / n;
        let var = z.vector.mapv(|v| (v - mean).powi(2)).sum() / n;
        assert!(mean.abs() < 0.05, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.05, "var = {var}");
    }

    #[test]
    fn test_latent_code_norm() {
        let code = LatentCode::new(vec![3.0, 4.0]);
        assert_eq!(code.norm_squared(), 25.0);
        assert_eq!(code.norm(), 5.0);
    }

    #[test]
    fn test_descend_moves_against_gradient() {
        let mut code = LatentCode::new(vec![1.0, -1.0]);
        code.descend(0.5, &Array1::from(vec![2.0, -4.0]));
        assert_eq!(code.vector.to_vec(), vec![0.0, 1.0]);
    }

    proptest! {
        #[test]
        fn test_latent_norm_non_negative(values in prop::collection::vec(-10.0f64..10.0, 1..100)) {
            let code = LatentCode::new(values);
            prop_assert!(code.norm() >= 0.0);
        }

        #[test]
        fn test_sample_dimension(dim in 1usize..64, seed in 0u64..1000) {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let z = LatentCode::sample(&mut rng, dim);
            prop_assert_eq!(z.dim(), dim);
            prop_assert!(z.vector.iter().all(|v| v.is_finite()));
        }
    }
}
