//! Measurement operator T: which output coordinates were observed.
//!
//! The operator is a dense N×D matrix. [`MeasurementOperator::leading`]
//! builds the `[I_N | 0]` row selection that keeps the first N pixels of a
//! flattened image, but any linear operator with the right width is accepted.

use ndarray::{s, Array1, Array2};

use crate::{Error, Result};

/// Linear observation operator T (observed × output)
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementOperator {
    matrix: Array2<f64>,
}

impl MeasurementOperator {
    /// Select the first `observed` of `output_dim` coordinates: T = [I | 0].
    pub fn leading(observed: usize, output_dim: usize) -> Result<Self> {
        if observed == 0 || observed > output_dim {
            return Err(Error::InvalidConfig(format!(
                "observed coordinates must be in 1..={output_dim}, got {observed}"
            )));
        }
        let mut matrix = Array2::zeros((observed, output_dim));
        matrix
            .slice_mut(s![.., ..observed])
            .assign(&Array2::eye(observed));
        Ok(Self { matrix })
    }

    /// Wrap an arbitrary operator matrix.
    pub fn from_matrix(matrix: Array2<f64>) -> Result<Self> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(Error::shape("T", &[1, 1], &[matrix.nrows(), matrix.ncols()]));
        }
        Ok(Self { matrix })
    }

    /// Number of observed coordinates N
    #[must_use]
    pub fn observed(&self) -> usize {
        self.matrix.nrows()
    }

    /// Length of the vectors the operator applies to
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.matrix.ncols()
    }

    /// Dense operator matrix
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// T·x
    pub fn project(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        if x.len() != self.output_dim() {
            return Err(Error::shape("projected vector", &[self.output_dim()], &[x.len()]));
        }
        Ok(self.matrix.dot(x))
    }

    /// Tᵗ·r
    pub fn adjoint(&self, r: &Array1<f64>) -> Result<Array1<f64>> {
        if r.len() != self.observed() {
            return Err(Error::shape("residual", &[self.observed()], &[r.len()]));
        }
        Ok(self.matrix.t().dot(r))
    }

    /// Full-length view of an observation with unobserved pixels set to zero.
    ///
    /// Equivalent to Tᵗ·T·x for a row selection.
    pub fn mask(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        let observed = self.project(x)?;
        self.adjoint(&observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_leading_selects_prefix() {
        let t = MeasurementOperator::leading(2, 4).unwrap();
        assert_eq!(t.observed(), 2);
        assert_eq!(t.output_dim(), 4);
        assert_eq!(
            t.matrix(),
            &array![[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]]
        );
        let x = array![0.1, 0.2, 0.3, 0.4];
        assert_eq!(t.project(&x).unwrap().to_vec(), vec![0.1, 0.2]);
    }

    #[test]
    fn test_adjoint_zero_fills() {
        let t = MeasurementOperator::leading(2, 4).unwrap();
        let r = array![1.5, -2.0];
        assert_eq!(t.adjoint(&r).unwrap().to_vec(), vec![1.5, -2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mask_keeps_observed_pixels() {
        let t = MeasurementOperator::leading(3, 5).unwrap();
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(t.mask(&x).unwrap().to_vec(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_leading_full_observation_is_identity() {
        let t = MeasurementOperator::leading(3, 3).unwrap();
        assert_eq!(t.matrix(), &Array2::<f64>::eye(3));
    }

    #[test]
    fn test_leading_rejects_out_of_range() {
        assert!(MeasurementOperator::leading(0, 4).is_err());
        assert!(MeasurementOperator::leading(5, 4).is_err());
    }

    #[test]
    fn test_project_rejects_wrong_length() {
        let t = MeasurementOperator::leading(2, 4).unwrap();
        let err = t.project(&array![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert!(t.adjoint(&array![1.0]).is_err());
    }

    #[test]
    fn test_from_matrix_general_operator() {
        let t = MeasurementOperator::from_matrix(array![[0.5, 0.5, 0.0]]).unwrap();
        assert_eq!(t.observed(), 1);
        assert_eq!(t.project(&array![2.0, 4.0, 9.0]).unwrap().to_vec(), vec![3.0]);
        assert!(MeasurementOperator::from_matrix(Array2::zeros((0, 3))).is_err());
    }
}
