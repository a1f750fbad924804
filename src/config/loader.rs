//! Loading run specifications from YAML

use std::fs;
use std::path::Path;

use super::schema::ReconstructSpec;
use super::validate::validate_config;
use crate::{Error, Result};

/// Load and validate a reconstruction specification
///
/// Relative weight and observation paths are resolved against the
/// directory holding the config file. File existence is not checked here;
/// see [`crate::config::validate_paths`].
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ReconstructSpec> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path)?;

    let mut spec: ReconstructSpec =
        serde_yaml::from_str(&yaml_content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_config(&spec)?;

    if let Some(base) = path.parent() {
        spec.resolve_paths(base);
    }

    Ok(spec)
}
