//! CLI module for reconstruir
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{format_restart, log, LogLevel, LogObserver};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
