use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod ui;

use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    logging: LoggingSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.ui.apply_cli_overrides(cli);
        self.logging.apply_cli_overrides(cli);
    }

    /// Fill defaults and validate, remembering where each checked value came from.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            page_size: detect_source(
                cli.page_size.is_some(),
                self.ui.page_size.is_some(),
                "TABULA__UI__PAGE_SIZE",
                "--page-size",
                "ui.page_size",
            ),
            toast_millis: detect_source(
                cli.toast_millis.is_some(),
                self.ui.toast_millis.is_some(),
                "TABULA__UI__TOAST_MILLIS",
                "--toast-millis",
                "ui.toast_millis",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "TABULA__UI__THEME",
                "--theme",
                "ui.theme",
            ),
        };

        let ui = self.ui.finalize();
        let logging = self.logging.finalize()?;

        let config = ResolvedConfig {
            theme: ui.theme,
            start_screen: ui.start_screen,
            initial_query: ui.initial_query,
            page_size: ui.page_size,
            toast_millis: ui.toast_millis,
            logging,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
