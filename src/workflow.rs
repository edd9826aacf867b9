use anyhow::{Context, Result};
use tabula::catalog;
use tabula::{Console, ConsoleOutcome, ExportRequest, ExportedPage, export_page};
use tabula_record_api::ScreenRegistry;
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive console.
pub(crate) struct ConsoleWorkflow {
	console: Console,
}

impl ConsoleWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let screens = catalog::registry().context("failed to register screens")?;
		let console = ConsoleFactory::build(screens, config);
		Ok(Self { console })
	}

	pub(crate) fn run(self) -> Result<ConsoleOutcome> {
		let outcome = self.console.run()?;
		info!(screens = outcome.screens.len(), "console closed");
		Ok(outcome)
	}
}

/// Translates resolved configuration into a configured [`Console`].
struct ConsoleFactory {
	console: Console,
}

impl ConsoleFactory {
	fn build(screens: ScreenRegistry, config: &ResolvedConfig) -> Console {
		Self::new(screens)
			.with_options(config)
			.with_theme(config.theme.as_deref())
			.finish()
	}

	fn new(screens: ScreenRegistry) -> Self {
		Self {
			console: Console::new(screens),
		}
	}

	fn with_options(mut self, config: &ResolvedConfig) -> Self {
		self.console = self.console.with_options(config.console_options());
		self
	}

	fn with_theme(mut self, theme: Option<&str>) -> Self {
		if let Some(theme) = theme {
			self.console = self.console.with_theme_name(theme);
		}
		self
	}

	fn finish(self) -> Console {
		self.console
	}
}

/// Render one page of a screen without opening the terminal UI.
pub(crate) fn run_export(request: &ExportRequest) -> Result<ExportedPage> {
	let screens = catalog::registry().context("failed to register screens")?;
	let page = export_page(&screens, request)
		.with_context(|| format!("failed to export screen `{}`", request.screen))?;
	Ok(page)
}
