//! Best-of-restarts result for one image.

use ndarray::Array1;

use crate::inversion::descent::Descent;
use crate::inversion::latent::LatentCode;

/// Index of the run with the lowest final cost.
///
/// Strict less-than against a running best that starts at +∞: ties keep
/// the earlier run and NaN costs are never selected.
pub fn select_best(runs: &[Descent]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, run) in runs.iter().enumerate() {
        let cost = run.final_cost();
        let best_cost = best.map_or(f64::INFINITY, |(_, c)| c);
        if cost < best_cost {
            best = Some((i, cost));
        }
    }
    best.map(|(i, _)| i)
}

/// Reconstruction of one image from its restarts
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Index of the winning restart
    pub best: usize,
    /// Every restart, in the order they were drawn
    pub runs: Vec<Descent>,
    /// Generator output at the winning latent code
    pub output: Array1<f64>,
}

impl Reconstruction {
    /// Winning restart
    #[must_use]
    pub fn best_run(&self) -> &Descent {
        &self.runs[self.best]
    }

    /// Latent code of the winning restart
    #[must_use]
    pub fn latent(&self) -> &LatentCode {
        &self.best_run().latent
    }

    /// Cost trajectory of the winning restart
    #[must_use]
    pub fn costs(&self) -> &[f64] {
        &self.best_run().costs
    }

    /// Final cost of the winning restart
    #[must_use]
    pub fn final_cost(&self) -> f64 {
        self.best_run().final_cost()
    }

    /// Final cost of every restart, in draw order
    #[must_use]
    pub fn restart_costs(&self) -> Vec<f64> {
        self.runs.iter().map(Descent::final_cost).collect()
    }
}
