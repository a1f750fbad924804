//! Latent-space inversion of a fixed two-layer generator
//!
//! Reconstructs a full image from a partial observation by searching the
//! latent code whose generated image best explains the observed pixels:
//!
//! ```text
//! Z ~ N(0, I) ─► Generator ─► X ─► T·X ─┬─► J(Z) = N·log‖T·X − Xn‖² + ‖Z‖²
//!     ▲                                 │
//!     └──── Z ← Z − η·∇J ◄── backprop ◄─┘        (× iterations, × restarts)
//! ```
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use reconstruir::inversion::{
//!     Generator, GeneratorConfig, InversionConfig, Inverter, MeasurementOperator,
//! };
//!
//! let config = GeneratorConfig { latent_dim: 2, hidden_dim: 3, output_dim: 4 };
//! let inverter = Inverter::new(
//!     Generator::with_seed(config, 42),
//!     MeasurementOperator::leading(2, 4).unwrap(),
//!     InversionConfig { step_size: 0.01, iterations: 100, restarts: 3, seed: Some(1), parallel: false },
//! )
//! .unwrap();
//!
//! let rec = inverter.reconstruct(&array![0.3, 0.7]).unwrap();
//! assert_eq!(rec.costs().len(), 100);
//! assert_eq!(rec.output.len(), 4);
//! ```

pub mod activation;
mod config;
pub mod cost;
mod descent;
mod generator;
pub mod gradient;
mod latent;
mod measurement;
mod observer;
mod restart;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{GeneratorConfig, InversionConfig};
pub use descent::{gradient_descent, Descent};
pub use generator::{ForwardPass, Generator, GeneratorWeights};
pub use gradient::gradient;
pub use latent::LatentCode;
pub use measurement::MeasurementOperator;
pub use observer::{InversionObserver, NoopObserver, RecordingObserver, RestartContext};
pub use restart::{select_best, Inverter, Reconstruction};
