//! YAML schema for declarative reconstruction runs
//!
//! ```yaml
//! generator: weights.safetensors
//! observations: digits.json
//! observed: 400
//! images: [0, 3, 7]
//! inversion:
//!   step_size: 0.0001
//!   iterations: 10000
//!   restarts: 20
//!   seed: 42
//!   parallel: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::inversion::InversionConfig;

/// Complete reconstruction specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconstructSpec {
    /// Generator weights file (`A_1`, `B_1`, `A_2`, `B_2`)
    pub generator: PathBuf,

    /// Observation file (`X_n`, optionally `X_i`)
    pub observations: PathBuf,

    /// Number of leading pixels the measurement operator keeps
    #[serde(default = "default_observed")]
    pub observed: usize,

    /// Images to reconstruct; every image when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<usize>>,

    /// Descent and restart parameters
    #[serde(default)]
    pub inversion: InversionConfig,
}

fn default_observed() -> usize {
    400
}

impl ReconstructSpec {
    /// Resolve relative file paths against `base` (the config's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.generator.is_relative() {
            self.generator = base.join(&self.generator);
        }
        if self.observations.is_relative() {
            self.observations = base.join(&self.observations);
        }
    }
}
