use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use tabula::app_dirs;
use tabula::logging::LoggingOptions;

use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";

/// `[logging]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) directory: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(dir) = cli.log_dir.clone() {
			self.directory = Some(dir);
		}
	}

	pub(super) fn finalize(self) -> Result<LoggingOptions> {
		let directory = match self.directory {
			Some(dir) => dir,
			None => app_dirs::get_log_dir().context("failed to resolve the log directory")?,
		};
		let level = self
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		Ok(LoggingOptions { directory, level })
	}
}
