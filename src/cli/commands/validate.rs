//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ValidateArgs};

use super::session;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    if args.detailed {
        let session = session::open(&spec).map_err(|e| format!("Validation failed: {e}"))?;
        log(level, LogLevel::Normal, "Configuration is valid");
        log(
            level,
            LogLevel::Normal,
            &format!(
                "\nGenerator:\n{}\n\nRun:\n{}\n  Images selected: {}",
                session::format_generator(session.inverter.generator()),
                session::format_run(&spec),
                session.observations.len()
            ),
        );
    } else {
        log(level, LogLevel::Normal, "Configuration is valid");
    }

    Ok(())
}
