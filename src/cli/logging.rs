//! Logging utilities for CLI output

use crate::inversion::{InversionObserver, RestartContext};

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Level selected by the global `--verbose` / `--quiet` flags
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Progress line printed after each restart
pub fn format_restart(ctx: &RestartContext) -> String {
    format!(
        "  Initialization {:>3}/{}: J(Z) = {:>12.5}  best = {:.5}",
        ctx.restart + 1,
        ctx.restarts,
        ctx.final_cost,
        ctx.best_cost
    )
}

/// Observer that reports inversion progress at the configured level
///
/// Image boundaries are logged at `Normal`, individual restarts only at
/// `Verbose`.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    level: LogLevel,
}

impl LogObserver {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl InversionObserver for LogObserver {
    fn on_image_begin(&mut self, image: usize, images: usize) {
        log(
            self.level,
            LogLevel::Normal,
            &format!("\nProcessing image {}/{images}...", image + 1),
        );
    }

    fn on_restart_end(&mut self, ctx: &RestartContext) {
        log(self.level, LogLevel::Verbose, &format_restart(ctx));
    }

    fn on_image_end(&mut self, image: usize, best_cost: f64) {
        log(
            self.level,
            LogLevel::Normal,
            &format!("Optimum cost for image {} is J(Z) = {best_cost:.5}", image + 1),
        );
    }
}
