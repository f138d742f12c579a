//! Terminal view for `tictactoe_core`.
//!
//! Turns key presses and mouse clicks into `(row, col)` moves and redraws
//! the board whenever the game reports a change.

#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, FirstPlayer, TuiConfig};
pub use terminal::TerminalGuard;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they stay off the board.
///
/// `RUST_LOG` takes precedence over the config file's filter.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
