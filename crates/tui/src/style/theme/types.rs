use ratatui::style::{Color, Style};
use tabula_record_api::NotificationKind;

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for headers, borders and the active tab.
	pub header: Style,
	/// Style for the selected table row.
	pub row_highlight: Style,
	/// Style for the search prompt.
	pub prompt: Style,
	/// Style for placeholders and muted hints.
	pub empty: Style,
	/// Style for focused inputs and active filters.
	pub highlight: Style,
	/// Toast style for completed changes.
	pub success: Style,
	/// Toast style for neutral messages.
	pub info: Style,
	/// Toast style for refused or stale actions.
	pub warning: Style,
	/// Inline form error messages.
	pub error: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for highlighted tabs.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header.bg.unwrap_or(Color::Reset))
	}

	/// Foreground-only header colour used for block borders and separators.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn notification_style(&self, kind: NotificationKind) -> Style {
		match kind {
			NotificationKind::Success => self.success,
			NotificationKind::Info => self.info,
			NotificationKind::Warning => self.warning,
		}
	}
}

/// A bundled theme and the name it is selected by.
#[derive(Debug, Clone)]
pub struct NamedTheme {
	pub name: String,
	pub theme: Theme,
}
