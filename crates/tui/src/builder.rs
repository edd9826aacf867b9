use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Result, bail};
use tabula_record_api::ScreenRegistry;

use crate::app::{App, ConsoleOutcome};
use crate::config::{ConsoleOptions, UiLabels};
use crate::style::{Theme, by_name};

/// A small builder for configuring the console before running it.
pub struct Console {
	screens: ScreenRegistry,
	options: ConsoleOptions,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
}

impl Console {
	/// Create a console over the provided screens.
	pub fn new(screens: ScreenRegistry) -> Self {
		Self {
			screens,
			options: ConsoleOptions::default(),
			labels: None,
			theme: None,
		}
	}

	pub fn with_options(mut self, options: ConsoleOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
		self.options.page_size = page_size;
		self
	}

	pub fn with_toast_duration(mut self, duration: Duration) -> Self {
		self.options.toast_duration = duration;
		self
	}

	pub fn with_start_screen(mut self, id: impl Into<String>) -> Self {
		self.options.start_screen = Some(id.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.options.initial_query = query.into();
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Select a built-in theme. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn build<'a>(self) -> Result<App<'a>> {
		if self.screens.is_empty() {
			bail!("no screens are registered");
		}
		if let Some(id) = self.options.start_screen.as_deref()
			&& self.screens.position(id).is_none()
		{
			bail!("unknown start screen `{id}`");
		}

		let mut app = App::new(self.screens, self.options);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		Ok(app)
	}

	/// Run the console with the configured options.
	pub fn run(self) -> Result<ConsoleOutcome> {
		self.build()?.run()
	}
}
