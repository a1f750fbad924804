//! Analytic gradient of the inversion objective with respect to Z.
//!
//! Backpropagates `J = N·log(‖T·X − Xn‖²) + ‖Z‖²` through the generator:
//!
//! ```text
//! u2 = (2 / norm²) · Tᵗ·(T·X − Xn)      ∂log‖r‖² / ∂X
//! v2 = u2 ⊙ σ'(W2)                      through the output nonlinearity
//! u1 = A2ᵗ·v2                           through the second layer
//! v1 = u1 ⊙ relu'(W1)                   through the hidden nonlinearity
//! u0 = A1ᵗ·v1                           through the first layer
//! ∇J = N·u0 + 2·Z
//! ```

use ndarray::Array1;

use super::activation::{relu_derivative, sigmoid_derivative};
use super::cost::ensure_non_degenerate;
use super::generator::{ForwardPass, Generator};
use super::latent::LatentCode;
use super::measurement::MeasurementOperator;
use crate::{Error, Result};

/// ∇_Z J at the point that produced `pass`.
///
/// `projected` is T·`pass.output`, `target` the observed pixels and `norm`
/// the residual norm ‖projected − target‖, all from the same evaluation.
/// `iteration` locates a degenerate residual in the error.
#[allow(clippy::too_many_arguments)]
pub fn gradient(
    generator: &Generator,
    operator: &MeasurementOperator,
    z: &LatentCode,
    pass: &ForwardPass,
    projected: &Array1<f64>,
    target: &Array1<f64>,
    norm: f64,
    iteration: usize,
) -> Result<Array1<f64>> {
    if operator.output_dim() != generator.output_dim() {
        return Err(Error::shape(
            "T",
            &[operator.observed(), generator.output_dim()],
            &[operator.observed(), operator.output_dim()],
        ));
    }
    if z.dim() != generator.latent_dim() {
        return Err(Error::shape("latent vector", &[generator.latent_dim()], &[z.dim()]));
    }
    ensure_non_degenerate(norm, iteration)?;

    let diff = super::cost::residual(projected, target)?;
    let u2 = operator.adjoint(&diff)? * (2.0 / (norm * norm));
    let v2 = u2 * sigmoid_derivative(&pass.pre_output);
    let u1 = generator.a2().t().dot(&v2);
    let v1 = u1 * relu_derivative(&pass.pre_hidden);
    let u0 = generator.a1().t().dot(&v1);

    let mut grad = u0 * operator.observed() as f64;
    grad.scaled_add(2.0, &z.vector);
    Ok(grad)
}
