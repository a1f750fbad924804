//! Elementwise activations used by the generator and its backward pass.
//!
//! The output nonlinearity uses the *mirrored* logistic form
//! `σ(x) = 1 / (1 + e^x)`: it saturates to 1 as x → −∞ and to 0 as x → +∞.
//! Generator weights are trained against this form; the textbook
//! `1 / (1 + e^-x)` gives different images.

use ndarray::Array1;

/// ReLU: max(0, x)
#[inline]
pub fn relu_scalar(x: f64) -> f64 {
    x.max(0.0)
}

/// ReLU derivative: 1 where x > 0, 0 otherwise (including x = 0)
#[inline]
pub fn relu_derivative_scalar(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Mirrored sigmoid: 1 / (1 + e^x)
///
/// Evaluated through `e^-|x|` so neither branch overflows.
#[inline]
pub fn sigmoid_scalar(x: f64) -> f64 {
    if x > 0.0 {
        let e = (-x).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + x.exp())
    }
}

/// Derivative of the mirrored sigmoid: −e^x / (1 + e^x)²
///
/// Uses the identity −e^x / (1 + e^x)² = −σ(x)·(1 − σ(x)).
#[inline]
pub fn sigmoid_derivative_scalar(x: f64) -> f64 {
    let s = sigmoid_scalar(x);
    -s * (1.0 - s)
}

/// Elementwise ReLU.
pub fn relu(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(relu_scalar)
}

/// Elementwise ReLU derivative.
pub fn relu_derivative(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(relu_derivative_scalar)
}

/// Elementwise mirrored sigmoid.
pub fn sigmoid(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(sigmoid_scalar)
}

/// Elementwise derivative of the mirrored sigmoid.
pub fn sigmoid_derivative(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(sigmoid_derivative_scalar)
}
