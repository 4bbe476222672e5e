//! Tests for loading the bot configuration.

use std::io::Write;
use tictactoe_bot::BotConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "host = \"0.0.0.0\"\nport = 8443\nopponent_seed = 17\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = BotConfig::from_file(file.path()).unwrap();
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 8443);
    assert_eq!(*config.opponent_seed(), Some(17));
    assert_eq!(config.log_filter().as_deref(), Some("debug"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BotConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, BotConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();
    let err = BotConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
