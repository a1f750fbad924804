//! Text reports: learning curves and image panels
//!
//! Everything here is a pure function from results to strings; printing is
//! left to the caller.

mod curves;
mod image;
mod sparkline;

pub use curves::render_curves;
pub use image::{render_image, render_panels, ImageShape, SHADES};
pub use sparkline::{sparkline, GAP_CHAR, SPARK_CHARS};

use ndarray::Array1;

use crate::inversion::{MeasurementOperator, Reconstruction};
use crate::Result;

/// Ideal / observed / reconstructed panels for one image.
///
/// The observed panel shows the measured pixels with everything else
/// zeroed. The ideal panel is omitted when ground truth is unknown.
/// Returns `Ok(None)` when the image length has no 2-D layout.
pub fn render_triptych(
    operator: &MeasurementOperator,
    noisy: &Array1<f64>,
    ideal: Option<&Array1<f64>>,
    rec: &Reconstruction,
) -> Result<Option<String>> {
    let Some(shape) = ImageShape::square(rec.output.len()) else {
        return Ok(None);
    };
    let observed = operator.mask(noisy)?;
    let title = format!("observed ({} px)", operator.observed());

    let mut panels: Vec<(&str, &[f64])> = Vec::with_capacity(3);
    if let Some(ideal) = ideal.and_then(|x| x.as_slice()) {
        panels.push(("ideal", ideal));
    }
    if let (Some(obs), Some(out)) = (observed.as_slice(), rec.output.as_slice()) {
        panels.push((title.as_str(), obs));
        panels.push(("reconstructed", out));
    }
    Ok(render_panels(&panels, shape))
}
