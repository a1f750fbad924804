//! Fixed-step gradient descent on the latent code.
//!
//! Plain descent: no momentum, no line search, no early stopping. The cost
//! is recorded at every iteration before the update, so the trajectory has
//! exactly `iterations` entries and starts with the cost of the initial Z.

use ndarray::Array1;

use super::cost::{evaluate, residual, residual_norm};
use super::generator::Generator;
use super::gradient::gradient;
use super::latent::LatentCode;
use super::measurement::MeasurementOperator;
use crate::Result;

/// Outcome of one descent run
#[derive(Debug, Clone, PartialEq)]
pub struct Descent {
    /// Latent code after the last update
    pub latent: LatentCode,
    /// Cost at every iteration, oldest first
    pub costs: Vec<f64>,
}

impl Descent {
    /// Cost recorded at the last iteration
    #[must_use]
    pub fn final_cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(f64::INFINITY)
    }

    /// Cost recorded at the first iteration
    #[must_use]
    pub fn initial_cost(&self) -> f64 {
        self.costs.first().copied().unwrap_or(f64::INFINITY)
    }
}

/// Run `iterations` descent steps from `z` towards the observation `target`.
///
/// `z` is consumed: it is the restart's own buffer and is updated in place.
pub fn gradient_descent(
    generator: &Generator,
    operator: &MeasurementOperator,
    mut z: LatentCode,
    target: &Array1<f64>,
    step_size: f64,
    iterations: usize,
) -> Result<Descent> {
    let observed = operator.observed();
    let mut costs = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        let pass = generator.forward(&z)?;
        let projected = operator.project(&pass.output)?;
        let norm = residual_norm(&residual(&projected, target)?);
        costs.push(evaluate(observed, norm, &z, iteration)?);

        let grad = gradient(
            generator, operator, &z, &pass, &projected, target, norm, iteration,
        )?;
        z.descend(step_size, &grad);
    }

    Ok(Descent { latent: z, costs })
}
