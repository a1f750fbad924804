//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs};
use crate::io::load_generator;

use super::session;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    let generator =
        load_generator(&spec.generator).map_err(|e| format!("Failed to load generator: {e}"))?;

    log(level, LogLevel::Normal, "Configuration Info:");
    log(
        level,
        LogLevel::Normal,
        &format!(
            "\nWeights: {}\n{}\n\nObservations: {}\n{}",
            spec.generator.display(),
            session::format_generator(&generator),
            spec.observations.display(),
            session::format_run(&spec)
        ),
    );

    Ok(())
}
