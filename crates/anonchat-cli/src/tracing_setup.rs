//! Tracing setup for the anonchat CLI
//!
//! The TUI owns the terminal, so while it runs logs go to a file. Every
//! other command logs to stderr.
//!
//! Usage:
//!   anonchat --debug ...               # Debug level by default
//!   RUST_LOG=anonchat_core=trace ...   # Fine-grained log control

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Where log lines are written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error, for non-interactive commands.
    Stderr,
    /// Append to a file, for the full-screen TUI.
    File(&'a Path),
}

/// Tracing configuration options
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig<'a> {
    /// Default to debug level unless RUST_LOG is set
    pub debug: bool,
    pub target: LogTarget<'a>,
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn make_writer(target: LogTarget<'_>) -> Result<BoxMakeWriter, CliError> {
    match target {
        LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

/// Build the subscriber without installing it.
pub fn build_subscriber(
    config: TracingConfig<'_>,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, CliError> {
    // No escape codes in log files
    let ansi = matches!(config.target, LogTarget::Stderr);

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.debug))
        .with_target(config.debug)
        .with_ansi(ansi)
        .with_writer(make_writer(config.target)?)
        .compact()
        .finish())
}

/// Install the global subscriber.
pub fn init_tracing(config: TracingConfig<'_>) -> Result<(), CliError> {
    tracing::subscriber::set_global_default(build_subscriber(config)?)
        .map_err(|e| CliError::Tracing(e.to_string()))
}
