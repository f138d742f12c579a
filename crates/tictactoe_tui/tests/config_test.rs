//! Tests for loading the terminal board's config file.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_core::{Player, StartingPlayer};
use tictactoe_tui::{FirstPlayer, TuiConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.starting(), StartingPlayer::Random);
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe_tui.log"));
}

#[test]
fn test_file_values_are_honoured() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "first_player = \"o\"\nlog_file = \"/tmp/board.log\"\nlog_filter = \"debug\""
    )
    .expect("write config");

    let config = TuiConfig::load(file.path()).expect("valid config");
    assert_eq!(config.first_player(), &FirstPlayer::O);
    assert_eq!(config.starting(), StartingPlayer::Fixed(Player::O));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/board.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_player = \"nobody\"").expect("write config");

    let err = TuiConfig::load(file.path()).expect_err("invalid player");
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_player = \"x\"").expect("write config");

    let config = TuiConfig::load(file.path())
        .expect("valid config")
        .with_overrides(Some(FirstPlayer::Random), None);
    assert_eq!(config.starting(), StartingPlayer::Random);
}
