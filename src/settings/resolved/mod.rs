use std::num::NonZeroUsize;
use std::time::Duration;

use tabula::logging::LoggingOptions;
use tabula_record_api::default_page_size;
use tabula_tui::ConsoleOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub theme: Option<String>,
	pub start_screen: Option<String>,
	pub initial_query: String,
	pub page_size: usize,
	pub toast_millis: u64,
	pub logging: LoggingOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}

	/// Rows per page; validation guarantees a non-zero value.
	pub fn page_size(&self) -> NonZeroUsize {
		NonZeroUsize::new(self.page_size).unwrap_or_else(default_page_size)
	}

	pub fn toast_duration(&self) -> Duration {
		Duration::from_millis(self.toast_millis)
	}

	/// Startup options for the interactive console.
	pub fn console_options(&self) -> ConsoleOptions {
		ConsoleOptions {
			page_size: self.page_size(),
			toast_duration: self.toast_duration(),
			start_screen: self.start_screen.clone(),
			initial_query: self.initial_query.clone(),
		}
	}
}
