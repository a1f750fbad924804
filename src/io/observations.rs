//! Observation sets: one image per column.

use ndarray::{Array1, Array2, Axis};

use crate::{Error, Result};

/// Noisy images to reconstruct, with optional ground truth
///
/// Both matrices are `output_dim × images`; column `i` is image `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    noisy: Array2<f64>,
    ideal: Option<Array2<f64>>,
}

impl ObservationSet {
    /// Build from noisy images and optional ground truth of the same shape.
    pub fn new(noisy: Array2<f64>, ideal: Option<Array2<f64>>) -> Result<Self> {
        if let Some(ideal) = &ideal {
            if ideal.dim() != noisy.dim() {
                return Err(Error::shape(
                    "X_i",
                    &[noisy.nrows(), noisy.ncols()],
                    &[ideal.nrows(), ideal.ncols()],
                ));
            }
        }
        Ok(Self { noisy, ideal })
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.noisy.ncols()
    }

    /// Whether the set holds no images
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of each image
    pub fn image_dim(&self) -> usize {
        self.noisy.nrows()
    }

    /// Noisy image `i`, or `None` when out of range
    pub fn noisy(&self, i: usize) -> Option<Array1<f64>> {
        (i < self.len()).then(|| self.noisy.column(i).to_owned())
    }

    /// Ground-truth image `i`, if ground truth was supplied
    pub fn ideal(&self, i: usize) -> Option<Array1<f64>> {
        let ideal = self.ideal.as_ref()?;
        (i < ideal.ncols()).then(|| ideal.column(i).to_owned())
    }

    /// Whether ground truth is available
    pub fn has_ideal(&self) -> bool {
        self.ideal.is_some()
    }

    /// All noisy images, in column order
    pub fn noisy_images(&self) -> Vec<Array1<f64>> {
        self.noisy
            .axis_iter(Axis(1))
            .map(|col| col.to_owned())
            .collect()
    }

    /// Keep only the listed images, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.len()) {
            return Err(Error::InvalidConfig(format!(
                "image index {bad} out of range (set holds {} images)",
                self.len()
            )));
        }
        Ok(Self {
            noisy: self.noisy.select(Axis(1), indices),
            ideal: self.ideal.as_ref().map(|m| m.select(Axis(1), indices)),
        })
    }

    /// Noisy image matrix
    pub fn noisy_matrix(&self) -> &Array2<f64> {
        &self.noisy
    }

    /// Ground-truth image matrix
    pub fn ideal_matrix(&self) -> Option<&Array2<f64>> {
        self.ideal.as_ref()
    }
}
