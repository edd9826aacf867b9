use std::num::NonZeroUsize;
use std::time::Duration;

use tabula_record_api::{DEFAULT_TOAST_DURATION, default_page_size};

/// Behavioural knobs applied when the console starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOptions {
	/// Rows per table page.
	pub page_size: NonZeroUsize,
	/// How long toasts stay up unless dismissed.
	pub toast_duration: Duration,
	/// Screen id to open first. The first registered screen otherwise.
	pub start_screen: Option<String>,
	/// Free-text query pre-filled on the start screen.
	pub initial_query: String,
}

impl Default for ConsoleOptions {
	fn default() -> Self {
		Self {
			page_size: default_page_size(),
			toast_duration: DEFAULT_TOAST_DURATION,
			start_screen: None,
			initial_query: String::new(),
		}
	}
}

/// Fixed text rendered around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Label in front of the search input.
	pub search_prompt: String,
	/// Shown when a screen has no records at all.
	pub empty_message: String,
	/// Shown when filters reject every record.
	pub no_match_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			search_prompt: "Search".to_string(),
			empty_message: "No records yet".to_string(),
			no_match_message: "No matching records".to_string(),
		}
	}
}
