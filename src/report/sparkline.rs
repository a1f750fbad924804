//! Unicode sparklines for cost trajectories.

/// Unicode sparkline characters, lowest to highest.
pub const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Rendered in place of NaN or infinite values.
pub const GAP_CHAR: char = ' ';

/// Generate a sparkline string from a slice of values.
///
/// Values are subsampled down to `width` when longer. The extent is taken
/// over finite values only; non-finite entries render as [`GAP_CHAR`].
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let values = subsample(values, width);

    let finite = || values.iter().copied().filter(|v| v.is_finite());
    let min = finite().fold(f64::INFINITY, f64::min);
    let max = finite().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                GAP_CHAR
            } else if range <= f64::EPSILON * max.abs().max(1.0) {
                SPARK_CHARS[4]
            } else {
                let idx = ((v - min) / range * 7.0).round() as usize;
                SPARK_CHARS[idx.min(7)]
            }
        })
        .collect()
}

/// Pick `width` evenly spaced samples, always keeping the last value.
fn subsample(values: &[f64], width: usize) -> Vec<f64> {
    if values.len() <= width {
        return values.to_vec();
    }
    if width == 1 {
        return vec![values[values.len() - 1]];
    }
    let last = values.len() - 1;
    (0..width)
        .map(|i| values[i * last / (width - 1)])
        .collect()
}
