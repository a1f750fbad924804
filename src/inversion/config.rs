//! Configuration types for the generator and the inversion loop.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Architecture of the two-layer generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Dimension of the latent space
    pub latent_dim: usize,
    /// Hidden (ReLU) layer size
    pub hidden_dim: usize,
    /// Output size (flattened image)
    pub output_dim: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            latent_dim: 10,
            hidden_dim: 128,
            output_dim: 784,
        }
    }
}

/// Gradient-descent and restart parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InversionConfig {
    /// Fixed step size of every descent update
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    /// Iterations per restart (also the trajectory length)
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Random initializations per image
    #[serde(default = "default_restarts")]
    pub restarts: usize,
    /// Seed of the master RNG; drawn from the OS when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Run restarts on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_step_size() -> f64 {
    1e-4
}

fn default_iterations() -> usize {
    10_000
}

fn default_restarts() -> usize {
    20
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            step_size: default_step_size(),
            iterations: default_iterations(),
            restarts: default_restarts(),
            seed: None,
            parallel: false,
        }
    }
}

impl InversionConfig {
    /// Reject parameters the descent loop cannot run with.
    pub fn check(&self) -> Result<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be > 0".into()));
        }
        if self.restarts == 0 {
            return Err(Error::InvalidConfig("restarts must be > 0".into()));
        }
        Ok(())
    }
}
