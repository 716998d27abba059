//! anonchat CLI: anonymous chat in the terminal

mod replay;
mod tracing_setup;

use anonchat_core::{Config, ConfigError};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use tracing_setup::{init_tracing, LogTarget, TracingConfig};

/// Anonymous chat with a terminal UI
#[derive(Parser)]
#[command(name = "anonchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "ANONCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Tui,

    /// Send each stdin line through a composer and print the conversation
    ///
    /// Inside a line, `\n` starts a new line in the message and `\\` is a
    /// literal backslash.
    Replay {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default config file
    Init,

    /// Print the effective config as JSON
    Config,
}

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tui(#[from] anonchat_tui::TuiError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Tracing(String),

    #[error("config already exists at {}", .0.display())]
    AlreadyExists(PathBuf),
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    if let Err(e) = run(&cli, &config_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config_path: &Path) -> Result<(), CliError> {
    match &cli.command {
        None | Some(Commands::Tui) => cmd_tui(config_path, cli.debug),
        Some(Commands::Replay { json }) => {
            init_stderr_tracing(cli.debug)?;
            cmd_replay(*json)
        }
        Some(Commands::Init) => {
            init_stderr_tracing(cli.debug)?;
            cmd_init(config_path)
        }
        Some(Commands::Config) => {
            init_stderr_tracing(cli.debug)?;
            cmd_config(config_path)
        }
    }
}

fn init_stderr_tracing(debug: bool) -> Result<(), CliError> {
    init_tracing(TracingConfig {
        debug,
        target: LogTarget::Stderr,
    })
}

fn cmd_tui(config_path: &Path, debug: bool) -> Result<(), CliError> {
    // Log path depends on the config: report the fallback after init
    let (config, fell_back) = Config::load_with_fallback(config_path)?;
    let log_path = config.log_path();
    init_tracing(TracingConfig {
        debug,
        target: LogTarget::File(&log_path),
    })?;
    log_tui_start(config_path, fell_back);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(anonchat_tui::run_tui(config))?;
    Ok(())
}

fn log_tui_start(config_path: &Path, fell_back: bool) {
    if fell_back {
        warn!(path = %config_path.display(), "config not found, using defaults");
    }
    info!(config = %config_path.display(), "starting tui");
}

fn cmd_replay(json: bool) -> Result<(), CliError> {
    let replay = replay::replay(io::stdin().lock())?;
    info!(
        messages = replay.conversation.len(),
        rejected = replay.rejected,
        "replay finished"
    );

    let output = if json {
        let mut json = replay.to_json()?;
        json.push('\n');
        json
    } else {
        replay.to_text()
    };
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

fn cmd_init(config_path: &Path) -> Result<(), CliError> {
    write_default_config(config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}

fn write_default_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    Config::default().save(path)?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}

fn cmd_config(config_path: &Path) -> Result<(), CliError> {
    let config = Config::load_or_default(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::try_parse_from(["anonchat"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["anonchat", "replay", "--json", "--config", "/tmp/c.json"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Replay { json: true })));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
    }

    #[test]
    fn test_missing_config_is_logged_to_tui_log() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("absent.json");

        let (config, fell_back) = Config::load_with_fallback(&config_path).unwrap();
        assert!(fell_back);
        let log_path = dir.path().join("logs").join("anonchat.log");
        let subscriber = tracing_setup::build_subscriber(TracingConfig {
            debug: false,
            target: LogTarget::File(&log_path),
        })
        .unwrap();
        tracing::subscriber::with_default(subscriber, || {
            log_tui_start(&config_path, fell_back);
        });

        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("config not found, using defaults"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        write_default_config(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.placeholder, Config::default().placeholder);

        let err = write_default_config(&path).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert!(err.to_string().starts_with("config already exists at "));
    }
}
