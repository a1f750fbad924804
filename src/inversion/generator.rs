//! Fixed two-layer generator network.
//!
//! ```text
//! Z ─► A1·Z + B1 ─► ReLU ─► A2·Z1 + B2 ─► σ ─► X
//!      (W1)          (Z1)    (W2)              (output)
//! ```
//!
//! The intermediate activations are not kept inside the generator. Every
//! call to [`Generator::forward`] returns a [`ForwardPass`] that the
//! gradient engine consumes, so a gradient can only ever be computed from
//! the pass that produced it.

use ndarray::{Array1, Array2};
use rand::Rng;

use super::activation::{relu, sigmoid};
use super::config::GeneratorConfig;
use super::latent::{standard_normal, LatentCode};
use crate::{Error, Result};

/// Raw generator parameters as supplied by an external store.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorWeights {
    /// First layer weights (hidden × latent)
    pub a1: Array2<f64>,
    /// First layer bias (hidden)
    pub b1: Array1<f64>,
    /// Second layer weights (output × hidden)
    pub a2: Array2<f64>,
    /// Second layer bias (output)
    pub b2: Array1<f64>,
}

/// Intermediate values of one forward evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// W1 = A1·Z + B1
    pub pre_hidden: Array1<f64>,
    /// Z1 = relu(W1)
    pub hidden: Array1<f64>,
    /// W2 = A2·Z1 + B2
    pub pre_output: Array1<f64>,
    /// X = σ(W2), each coordinate in (0, 1)
    pub output: Array1<f64>,
}

/// Generator network: maps latent vectors to flattened images
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    a1: Array2<f64>,
    b1: Array1<f64>,
    a2: Array2<f64>,
    b2: Array1<f64>,
}

impl Generator {
    /// Build a generator from externally supplied weights.
    ///
    /// Dimensions are inferred from `A1` (hidden × latent) and `A2`
    /// (output × hidden); the remaining parameters must agree.
    pub fn new(weights: GeneratorWeights) -> Result<Self> {
        let GeneratorWeights { a1, b1, a2, b2 } = weights;
        let (hidden_dim, latent_dim) = a1.dim();
        let (output_dim, a2_cols) = a2.dim();

        if a2_cols != hidden_dim {
            return Err(Error::shape(
                "A_2",
                &[output_dim, hidden_dim],
                &[output_dim, a2_cols],
            ));
        }
        if b1.len() != hidden_dim {
            return Err(Error::shape("B_1", &[hidden_dim], &[b1.len()]));
        }
        if b2.len() != output_dim {
            return Err(Error::shape("B_2", &[output_dim], &[b2.len()]));
        }
        if latent_dim == 0 || hidden_dim == 0 || output_dim == 0 {
            return Err(Error::shape(
                "generator",
                &[1, 1, 1],
                &[latent_dim, hidden_dim, output_dim],
            ));
        }

        let config = GeneratorConfig {
            latent_dim,
            hidden_dim,
            output_dim,
        };
        Ok(Self { config, a1, b1, a2, b2 })
    }

    /// Create a randomly initialised generator with a seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::random(config, &mut rng)
    }

    fn random<R: Rng>(config: GeneratorConfig, rng: &mut R) -> Self {
        let GeneratorConfig {
            latent_dim,
            hidden_dim,
            output_dim,
        } = config;
        let a1_std = xavier_std(hidden_dim, latent_dim);
        let a2_std = xavier_std(output_dim, hidden_dim);

        let a1 = Array2::from_shape_simple_fn((hidden_dim, latent_dim), || {
            standard_normal(rng) * a1_std
        });
        let b1 = Array1::from_shape_simple_fn(hidden_dim, || standard_normal(rng) * a1_std);
        let a2 = Array2::from_shape_simple_fn((output_dim, hidden_dim), || {
            standard_normal(rng) * a2_std
        });
        let b2 = Array1::from_shape_simple_fn(output_dim, || standard_normal(rng) * a2_std);

        Self { config, a1, b1, a2, b2 }
    }

    /// Evaluate the network at `z`.
    ///
    /// Pure: the same latent code always yields a bit-identical pass.
    pub fn forward(&self, z: &LatentCode) -> Result<ForwardPass> {
        if z.dim() != self.config.latent_dim {
            return Err(Error::shape("latent vector", &[self.config.latent_dim], &[z.dim()]));
        }

        let pre_hidden = self.a1.dot(&z.vector) + &self.b1;
        let hidden = relu(&pre_hidden);
        let pre_output = self.a2.dot(&hidden) + &self.b2;
        let output = sigmoid(&pre_output);

        Ok(ForwardPass {
            pre_hidden,
            hidden,
            pre_output,
            output,
        })
    }

    /// Architecture of this generator
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Latent (input) dimension
    #[must_use]
    pub fn latent_dim(&self) -> usize {
        self.config.latent_dim
    }

    /// Hidden layer dimension
    #[must_use]
    pub fn hidden_dim(&self) -> usize {
        self.config.hidden_dim
    }

    /// Output dimension
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.config.output_dim
    }

    /// First layer weights (hidden × latent)
    pub fn a1(&self) -> &Array2<f64> {
        &self.a1
    }

    /// Second layer weights (output × hidden)
    pub fn a2(&self) -> &Array2<f64> {
        &self.a2
    }

    /// Copy the parameters back out.
    #[must_use]
    pub fn weights(&self) -> GeneratorWeights {
        GeneratorWeights {
            a1: self.a1.clone(),
            b1: self.b1.clone(),
            a2: self.a2.clone(),
            b2: self.b2.clone(),
        }
    }

    /// Get number of parameters
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.a1.len() + self.b1.len() + self.a2.len() + self.b2.len()
    }
}

fn xavier_std(fan_out: usize, fan_in: usize) -> f64 {
    (2.0 / (fan_in + fan_out) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use proptest::prelude::*;

    fn tiny_config() -> GeneratorConfig {
        GeneratorConfig {
            latent_dim: 2,
            hidden_dim: 3,
            output_dim: 4,
        }
    }

    #[test]
    fn test_generator_creation() {
        let gen = Generator::with_seed(tiny_config(), 42);
        assert_eq!(gen.latent_dim(), 2);
        assert_eq!(gen.hidden_dim(), 3);
        assert_eq!(gen.output_dim(), 4);
        assert_eq!(gen.num_parameters(), 3 * 2 + 3 + 4 * 3 + 4);
    }

    #[test]
    fn test_forward_by_hand() {
        let weights = GeneratorWeights {
            a1: array![[1.0, 0.0], [0.0, -1.0]],
            b1: array![0.0, 0.5],
            a2: array![[1.0, 1.0]],
            b2: array![-1.0],
        };
        let gen = Generator::new(weights).unwrap();
        let pass = gen.forward(&LatentCode::new(vec![2.0, 1.0])).unwrap();

        assert_eq!(pass.pre_hidden.to_vec(), vec![2.0, -0.5]);
        assert_eq!(pass.hidden.to_vec(), vec![2.0, 0.0]);
        assert_eq!(pass.pre_output.to_vec(), vec![1.0]);
        assert!((pass.output[0] - 1.0 / (1.0 + 1f64.exp())).abs() < 1e-15);
    }

    #[test]
    fn test_generator_deterministic() {
        let gen = Generator::with_seed(GeneratorConfig::default(), 3);
        let z = LatentCode::new(vec![0.5; 10]);
        let first = gen.forward(&z).unwrap();
        let second = gen.forward(&z).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_weights_drawn_from_latent_sampler() {
        use rand::SeedableRng;
        let gen = Generator::with_seed(tiny_config(), 5);
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let a1_std = xavier_std(3, 2);
        let first = standard_normal(&mut rng) * a1_std;
        let second = standard_normal(&mut rng) * a1_std;
        assert_eq!(gen.a1()[[0, 0]], first);
        assert_eq!(gen.a1()[[0, 1]], second);
    }

    #[test]
    fn test_forward_rejects_wrong_latent_dim() {
        let gen = Generator::with_seed(tiny_config(), 1);
        let err = gen.forward(&LatentCode::zeros(5)).unwrap_err();
        match err {
            Error::ShapeMismatch { expected, actual, .. } => {
                assert_eq!(expected, vec![2]);
                assert_eq!(actual, vec![5]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_new_rejects_mismatched_a2() {
        let weights = GeneratorWeights {
            a1: Array2::zeros((3, 2)),
            b1: Array1::zeros(3),
            a2: Array2::zeros((4, 5)),
            b2: Array1::zeros(4),
        };
        let err = Generator::new(weights).unwrap_err();
        assert!(err.to_string().contains("A_2"));
        assert!(err.to_string().contains("[4, 5]"));
    }

    #[test]
    fn test_new_rejects_mismatched_biases() {
        let bad_b1 = GeneratorWeights {
            a1: Array2::zeros((3, 2)),
            b1: Array1::zeros(2),
            a2: Array2::zeros((4, 3)),
            b2: Array1::zeros(4),
        };
        assert!(Generator::new(bad_b1).unwrap_err().to_string().contains("B_1"));

        let bad_b2 = GeneratorWeights {
            a1: Array2::zeros((3, 2)),
            b1: Array1::zeros(3),
            a2: Array2::zeros((4, 3)),
            b2: Array1::zeros(7),
        };
        assert!(Generator::new(bad_b2).unwrap_err().to_string().contains("B_2"));
    }

    #[test]
    fn test_weights_round_trip() {
        let gen = Generator::with_seed(tiny_config(), 9);
        let rebuilt = Generator::new(gen.weights()).unwrap();
        let z = LatentCode::new(vec![0.3, -0.7]);
        assert_eq!(gen.forward(&z).unwrap(), rebuilt.forward(&z).unwrap());
    }

    proptest! {
        #[test]
        fn prop_output_in_unit_interval(seed in 0u64..500, zs in prop::collection::vec(-3.0f64..3.0, 2)) {
            let gen = Generator::with_seed(tiny_config(), seed);
            let pass = gen.forward(&LatentCode::new(zs)).unwrap();
            prop_assert_eq!(pass.output.len(), 4);
            prop_assert!(pass.output.iter().all(|&x| x > 0.0 && x < 1.0));
            prop_assert!(pass.hidden.iter().all(|&h| h >= 0.0));
        }
    }
}
