//! Loading everything a run needs from a validated spec.

use crate::config::{validate_config, validate_paths, ReconstructSpec};
use crate::inversion::{Generator, Inverter, MeasurementOperator};
use crate::io::{load_generator, load_observations, ObservationSet};
use crate::{Error, Result};

/// Generator, operator and selected observations of one run
pub(crate) struct Session {
    pub inverter: Inverter,
    pub observations: ObservationSet,
    /// Indices of the selected images in the observation file
    pub images: Vec<usize>,
}

/// Load weights and observations and check they fit together.
pub(crate) fn open(spec: &ReconstructSpec) -> Result<Session> {
    validate_config(spec)?;
    validate_paths(spec)?;

    let generator = load_generator(&spec.generator)?;
    let all = load_observations(&spec.observations)?;

    if all.image_dim() != generator.output_dim() {
        return Err(Error::shape(
            "X_n",
            &[generator.output_dim(), all.len()],
            &[all.image_dim(), all.len()],
        ));
    }

    let images = spec
        .images
        .clone()
        .unwrap_or_else(|| (0..all.len()).collect());
    let observations = all.select(&images)?;

    let inverter = Inverter::new(
        generator,
        MeasurementOperator::leading(spec.observed, all.image_dim())?,
        spec.inversion,
    )?;

    Ok(Session {
        inverter,
        observations,
        images,
    })
}

/// Multi-line description of a generator's layer shapes
pub(crate) fn format_generator(generator: &Generator) -> String {
    let c = generator.config();
    [
        format!("  Latent dim: {}", c.latent_dim),
        format!("  A_1: {} × {}", c.hidden_dim, c.latent_dim),
        format!("  B_1: {}", c.hidden_dim),
        format!("  A_2: {} × {}", c.output_dim, c.hidden_dim),
        format!("  B_2: {}", c.output_dim),
        format!("  Parameters: {}", generator.num_parameters()),
    ]
    .join("\n")
}

/// Multi-line description of the inversion parameters
pub(crate) fn format_run(spec: &ReconstructSpec) -> String {
    let inv = &spec.inversion;
    let mut lines = vec![
        format!("  Observed pixels: {}", spec.observed),
        format!("  Step size: {}", inv.step_size),
        format!("  Iterations: {}", inv.iterations),
        format!("  Restarts: {}", inv.restarts),
        format!(
            "  Seed: {}",
            inv.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
        ),
        format!("  Parallel: {}", inv.parallel),
    ];
    if let Some(images) = &spec.images {
        lines.push(format!("  Images: {images:?}"));
    }
    lines.join("\n")
}
