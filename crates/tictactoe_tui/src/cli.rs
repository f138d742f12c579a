//! Command-line interface for the terminal board.

use crate::config::FirstPlayer;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (missing file means defaults)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Who moves first, overriding the config file
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Where to write logs, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe_tui"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.first.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_first_player_flag() {
        let cli = Cli::parse_from(["tictactoe_tui", "--first", "o", "--log-file", "game.log"]);
        assert_eq!(cli.first, Some(FirstPlayer::O));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }
}
