//! Learning curves: one sparkline row per image.

use super::sparkline::sparkline;

/// Render the best cost trajectory of each image.
///
/// Pure function of the trajectories; labels are 1-based.
pub fn render_curves(trajectories: &[&[f64]], width: usize) -> String {
    trajectories
        .iter()
        .enumerate()
        .map(|(i, costs)| {
            let (first, last) = match (costs.first(), costs.last()) {
                (Some(first), Some(last)) => (*first, *last),
                _ => return format!("Image {}: (no iterations)", i + 1),
            };
            format!(
                "Image {}: {} {first:>12.5} → {last:<12.5} ({} iterations)",
                i + 1,
                sparkline(costs, width),
                costs.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
