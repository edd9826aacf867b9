use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::Theme;

/// A `#rrggbb` colour from a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub(super) struct Hex(Color);

impl TryFrom<String> for Hex {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let digits = value
			.trim()
			.strip_prefix('#')
			.filter(|digits| digits.len() == 6 && digits.chars().all(|ch| ch.is_ascii_hexdigit()))
			.ok_or_else(|| format!("expected a `#rrggbb` colour, found `{value}`"))?;
		let channel = |at: usize| {
			u8::from_str_radix(&digits[at..at + 2], 16).map_err(|error| error.to_string())
		};
		Ok(Self(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)))
	}
}

/// Colour roles a theme file may set. Every style slot of [`Theme`] is
/// derived from these; a missing role falls back to a text modifier so a
/// palette with no colours at all still renders legibly.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct Palette {
	/// Headers, borders and the active tab.
	accent: Option<Hex>,
	/// Background behind the header row and the active tab.
	surface: Option<Hex>,
	/// Text of the selected row.
	text: Option<Hex>,
	/// Background of the selected row and the inactive tabs.
	selection: Option<Hex>,
	/// Placeholders, hints and separators.
	muted: Option<Hex>,
	/// Focused form inputs and filter fields.
	focus: Option<Hex>,
	prompt: Option<Hex>,
	success: Option<Hex>,
	info: Option<Hex>,
	warning: Option<Hex>,
	/// Inline form validation messages.
	error: Option<Hex>,
	/// Text drawn on top of a toast background.
	on_toast: Option<Hex>,
}

impl Palette {
	pub(super) fn theme(&self) -> Theme {
		Theme {
			header: self.header(),
			row_highlight: self.row_highlight(),
			prompt: paint(self.prompt, None).add_modifier(Modifier::BOLD),
			empty: muted_or(self.muted, Modifier::ITALIC, Modifier::DIM),
			highlight: paint(self.focus, None).add_modifier(Modifier::BOLD),
			success: self.toast(self.success),
			info: self.toast(self.info),
			warning: self.toast(self.warning).add_modifier(Modifier::BOLD),
			error: muted_or(self.error, Modifier::empty(), Modifier::BOLD | Modifier::UNDERLINED),
		}
	}

	fn header(&self) -> Style {
		let style = paint(self.accent, self.surface).add_modifier(Modifier::BOLD);
		if self.accent.is_none() {
			style.add_modifier(Modifier::UNDERLINED)
		} else {
			style
		}
	}

	fn row_highlight(&self) -> Style {
		match self.selection {
			Some(_) => paint(self.text, self.selection).add_modifier(Modifier::BOLD),
			None => Style::new().add_modifier(Modifier::REVERSED),
		}
	}

	fn toast(&self, background: Option<Hex>) -> Style {
		match background {
			Some(_) => paint(self.on_toast, background),
			None => Style::new().add_modifier(Modifier::REVERSED),
		}
	}
}

fn paint(fg: Option<Hex>, bg: Option<Hex>) -> Style {
	let mut style = Style::new();
	if let Some(Hex(colour)) = fg {
		style = style.fg(colour);
	}
	if let Some(Hex(colour)) = bg {
		style = style.bg(colour);
	}
	style
}

fn muted_or(colour: Option<Hex>, with: Modifier, without: Modifier) -> Style {
	match colour {
		Some(_) => paint(colour, None).add_modifier(with),
		None => Style::new().add_modifier(without),
	}
}
