//! Visual styling utilities.
//!
//! Themes are colour schemes loaded from the TOML definitions bundled with the
//! crate. [`StyleConfig`] is the slot other visual knobs can join later.

/// Theme definitions, built-in themes and lookup helpers.
pub mod theme;

pub use theme::{NamedTheme, Theme, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
