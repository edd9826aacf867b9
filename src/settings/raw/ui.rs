use serde::Deserialize;
use tabula_record_api::{DEFAULT_PAGE_SIZE, DEFAULT_TOAST_DURATION};

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_screen: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) page_size: Option<usize>,
	pub(super) toast_millis: Option<u64>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) start_screen: Option<String>,
	pub(super) initial_query: String,
	pub(super) page_size: usize,
	pub(super) toast_millis: u64,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(screen) = cli.start_screen.clone() {
			self.start_screen = Some(screen);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(size) = cli.page_size {
			self.page_size = Some(size);
		}
		if let Some(millis) = cli.toast_millis {
			self.toast_millis = Some(millis);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let start_screen = self
			.start_screen
			.map(|screen| screen.trim().to_string())
			.filter(|screen| !screen.is_empty());
		UiResolution {
			theme: self.theme,
			start_screen,
			initial_query: self.initial_query.unwrap_or_default(),
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			toast_millis: self
				.toast_millis
				.unwrap_or(DEFAULT_TOAST_DURATION.as_millis() as u64),
		}
	}
}
