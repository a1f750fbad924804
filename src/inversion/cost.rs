//! Inversion objective.
//!
//! J(Z) = N·log(‖T·G(Z) − Xn‖²) + ‖Z‖²
//!
//! The log term makes the data fit scale-free; ‖Z‖² keeps the latent code
//! close to the standard-normal prior it was sampled from.

use ndarray::Array1;

use super::latent::LatentCode;
use crate::{Error, Result};

/// Raw objective `N·log(norm²) + ‖Z‖²`.
///
/// Total over its inputs: a zero `norm` yields −∞. Use [`evaluate`] to get
/// a zero residual reported as an error instead.
#[inline]
pub fn cost(observed: usize, norm: f64, z: &LatentCode) -> f64 {
    observed as f64 * (norm * norm).ln() + z.norm_squared()
}

/// Residual T·X − Xn.
pub fn residual(projected: &Array1<f64>, target: &Array1<f64>) -> Result<Array1<f64>> {
    if projected.len() != target.len() {
        return Err(Error::shape("observation", &[projected.len()], &[target.len()]));
    }
    Ok(projected - target)
}

/// Euclidean norm of a residual.
#[inline]
pub fn residual_norm(residual: &Array1<f64>) -> f64 {
    residual.dot(residual).sqrt()
}

/// Objective with the degenerate-residual guard.
///
/// `iteration` is only used to locate the failure in the error.
pub fn evaluate(observed: usize, norm: f64, z: &LatentCode, iteration: usize) -> Result<f64> {
    ensure_non_degenerate(norm, iteration)?;
    Ok(cost(observed, norm, z))
}

pub(crate) fn ensure_non_degenerate(norm: f64, iteration: usize) -> Result<()> {
    if norm > 0.0 && norm.is_finite() {
        Ok(())
    } else {
        Err(Error::DegenerateResidual { iteration, norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_cost_value() {
        let z = LatentCode::new(vec![1.0, 2.0]);
        // 3·log(4) + 5
        assert_relative_eq!(cost(3, 2.0, &z), 3.0 * 4f64.ln() + 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cost_unit_norm_is_prior_only() {
        let z = LatentCode::new(vec![3.0, 4.0]);
        assert_eq!(cost(400, 1.0, &z), 25.0);
    }

    #[test]
    fn test_raw_cost_zero_norm_is_negative_infinity() {
        let z = LatentCode::zeros(2);
        assert_eq!(cost(2, 0.0, &z), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_rejects_zero_norm() {
        let z = LatentCode::zeros(2);
        let err = evaluate(2, 0.0, &z, 7).unwrap_err();
        assert!(matches!(err, Error::DegenerateResidual { iteration: 7, .. }));
        assert!(evaluate(2, f64::NAN, &z, 0).is_err());
        assert!(evaluate(2, f64::INFINITY, &z, 0).is_err());
    }

    #[test]
    fn test_residual_and_norm() {
        let r = residual(&array![1.0, 5.0], &array![4.0, 1.0]).unwrap();
        assert_eq!(r.to_vec(), vec![-3.0, 4.0]);
        assert_eq!(residual_norm(&r), 5.0);
    }

    #[test]
    fn test_residual_length_mismatch() {
        assert!(residual(&array![1.0, 2.0], &array![1.0]).is_err());
    }
}
