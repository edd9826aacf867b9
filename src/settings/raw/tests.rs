use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
    let cli = CliArgs::parse_from([
        "tabula",
        "--theme",
        "paper",
        "--start-screen",
        "clients",
        "--query",
        "tech",
        "--page-size",
        "10",
        "--toast-millis",
        "800",
        "--log-dir",
        "/tmp/tabula-logs",
        "--log-level",
        "debug",
    ]);

    let mut config = RawConfig::default();
    config.ui.theme = Some("slate".into());
    config.ui.page_size = Some(3);
    config.apply_cli_overrides(&cli);

    assert_eq!(config.ui.theme.as_deref(), Some("paper"));
    assert_eq!(config.ui.start_screen.as_deref(), Some("clients"));
    assert_eq!(config.ui.initial_query.as_deref(), Some("tech"));
    assert_eq!(config.ui.page_size, Some(10));
    assert_eq!(config.ui.toast_millis, Some(800));
    assert_eq!(config.logging.directory, Some(PathBuf::from("/tmp/tabula-logs")));
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_fill_unset_values() {
    let cli = CliArgs::parse_from(["tabula", "--log-dir", "/tmp/tabula-logs"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);
    let resolved = config.resolve(&cli).expect("resolves");

    assert_eq!(resolved.page_size, 5);
    assert_eq!(resolved.toast_millis, 1500);
    assert_eq!(resolved.theme, None);
    assert_eq!(resolved.start_screen, None);
    assert_eq!(resolved.logging.level, "info");
}

#[test]
fn zero_page_size_from_cli_is_rejected() {
    let cli = CliArgs::parse_from(["tabula", "--page-size", "0", "--log-dir", "/tmp/tabula-logs"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);
    let err = config.resolve(&cli).unwrap_err().to_string();
    assert!(err.contains("ui.page_size"));
    assert!(err.contains("CLI flag `--page-size`"));
}

#[test]
fn unknown_theme_from_config_is_rejected() {
    let cli = CliArgs::parse_from(["tabula", "--log-dir", "/tmp/tabula-logs"]);
    let mut config = RawConfig::default();
    config.ui.theme = Some("neon".into());
    config.apply_cli_overrides(&cli);
    let err = config.resolve(&cli).unwrap_err().to_string();
    assert!(err.contains("configuration key `ui.theme`"));
    assert!(err.contains("value: neon"));
}
