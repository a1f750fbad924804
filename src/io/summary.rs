//! Machine-readable summary of a reconstruction run

use serde::{Deserialize, Serialize};

use crate::inversion::Reconstruction;

/// Per-image outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSummary {
    /// Image index within the observation set
    pub image: usize,
    /// Restart that produced the best cost
    pub best_restart: usize,
    /// Best final cost
    pub final_cost: f64,
    /// Final cost of every restart
    pub restart_costs: Vec<f64>,
    /// Best latent code
    pub latent: Vec<f64>,
    /// Reconstructed image
    pub reconstruction: Vec<f64>,
    /// Mean squared error against ground truth, when known
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mse: Option<f64>,
}

impl ImageSummary {
    /// Summarize one reconstruction
    pub fn new(image: usize, rec: &Reconstruction, ideal: Option<&ndarray::Array1<f64>>) -> Self {
        let mse = ideal
            .filter(|truth| truth.len() == rec.output.len() && !truth.is_empty())
            .map(|truth| {
                let diff = truth - &rec.output;
                diff.dot(&diff) / diff.len() as f64
            });
        Self {
            image,
            best_restart: rec.best,
            final_cost: rec.final_cost(),
            restart_costs: rec.restart_costs(),
            latent: rec.latent().vector.to_vec(),
            reconstruction: rec.output.to_vec(),
            mse,
        }
    }
}

/// Run summary written by `reconstruct --output`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub step_size: f64,
    pub iterations: usize,
    pub restarts: usize,
    pub observed: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
    pub images: Vec<ImageSummary>,
}
