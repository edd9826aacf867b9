use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tabula_record_api::{FieldDef, FieldKind, FilterSet, Schema};
use unicode_width::UnicodeWidthStr;

use super::popup_area;
use crate::style::Theme;

const PANEL_WIDTH: u16 = 56;
const FLAG_CYCLE: [&str; 3] = ["", "Yes", "No"];

/// Per-field filter editor for the active screen.
///
/// The panel only tracks focus; values live in the screen's [`FilterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPanel {
	schema: &'static Schema,
	focus: usize,
}

impl FilterPanel {
	#[must_use]
	pub fn new(schema: &'static Schema) -> Self {
		Self { schema, focus: 0 }
	}

	#[must_use]
	pub fn focused_field(&self) -> Option<&'static FieldDef> {
		self.schema.fields.get(self.focus)
	}

	pub fn focus_next(&mut self) {
		let len = self.schema.fields.len();
		if len > 0 {
			self.focus = (self.focus + 1) % len;
		}
	}

	pub fn focus_previous(&mut self) {
		let len = self.schema.fields.len();
		if len > 0 {
			self.focus = (self.focus + len - 1) % len;
		}
	}

	/// Append to the focused field's filter. Choices and flags are cycled instead.
	pub fn type_char(&self, filters: &mut FilterSet, ch: char) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		if def.kind.options().is_some() || def.kind == FieldKind::Flag {
			return false;
		}
		let mut value = filters.get(def.name).unwrap_or_default().to_string();
		value.push(ch);
		filters.set(self.schema, def.name, &value).is_ok()
	}

	pub fn backspace(&self, filters: &mut FilterSet) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		let mut value = filters.get(def.name).unwrap_or_default().to_string();
		if value.pop().is_none() {
			return false;
		}
		filters.set(self.schema, def.name, &value).is_ok()
	}

	/// Step a choice or flag filter through "any" and each option.
	pub fn cycle(&self, filters: &mut FilterSet, forward: bool) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		let options: Vec<&str> = match def.kind {
			FieldKind::Choice(options) => std::iter::once("").chain(options.iter().copied()).collect(),
			FieldKind::Flag => FLAG_CYCLE.to_vec(),
			_ => return false,
		};
		let current = filters.get(def.name).unwrap_or_default();
		let index = options
			.iter()
			.position(|option| option.eq_ignore_ascii_case(current))
			.unwrap_or(0);
		let next = if forward {
			(index + 1) % options.len()
		} else {
			(index + options.len() - 1) % options.len()
		};
		filters.set(self.schema, def.name, options[next]).is_ok()
	}

	/// Drop the focused field's filter. Returns whether one was set.
	pub fn clear_focused(&self, filters: &mut FilterSet) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		let was_set = filters.get(def.name).is_some();
		filters.clear_field(def.name);
		was_set
	}
}

/// Render the filter panel centred in `area`.
pub fn render_filter_panel(
	frame: &mut Frame,
	area: Rect,
	panel: &FilterPanel,
	filters: &FilterSet,
	theme: &Theme,
) {
	let lines = panel_lines(panel, filters, theme);
	let popup = popup_area(area, PANEL_WIDTH, lines.len() as u16 + 2);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(" Filters ", theme.header_style()));
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn panel_lines(panel: &FilterPanel, filters: &FilterSet, theme: &Theme) -> Vec<Line<'static>> {
	let label_width = panel
		.schema
		.fields
		.iter()
		.map(|def| def.label.width())
		.max()
		.unwrap_or_default();

	let mut lines: Vec<Line<'static>> = panel
		.schema
		.fields
		.iter()
		.enumerate()
		.map(|(index, def)| {
			let focused = index == panel.focus;
			let value = filters.get(def.name).unwrap_or_default();
			let (text, style) = match (value.is_empty(), focused) {
				(true, false) => ("any".to_string(), theme.empty_style()),
				(true, true) => ("▏".to_string(), theme.highlight),
				(false, true) => (format!("{value}▏"), theme.highlight),
				(false, false) => (value.to_string(), Style::default()),
			};
			Line::from(vec![
				Span::styled(if focused { "▶ " } else { "  " }, theme.highlight),
				Span::styled(format!("{:<label_width$}  ", def.label), theme.border_style()),
				Span::styled(text, style),
			])
		})
		.collect();

	lines.push(Line::default());
	lines.push(Line::from(Span::styled(
		"  type to filter · ←/→ choose · Del clear · Esc close",
		theme.empty_style(),
	)));
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	static FIELDS: &[FieldDef] = &[
		FieldDef::new("name", "Name", FieldKind::Text),
		FieldDef::new("tier", "Tier", FieldKind::Choice(&["Gold", "Silver"])),
		FieldDef::new("active", "Active", FieldKind::Flag),
	];
	static SCHEMA: Schema = Schema {
		fields: FIELDS,
		recent: &[],
	};

	#[test]
	fn typing_builds_a_substring_filter() {
		let panel = FilterPanel::new(&SCHEMA);
		let mut filters = FilterSet::new();
		assert!(panel.type_char(&mut filters, 'a'));
		assert!(panel.type_char(&mut filters, 'c'));
		assert_eq!(filters.get("name"), Some("ac"));
		assert!(panel.backspace(&mut filters));
		assert!(panel.backspace(&mut filters));
		assert_eq!(filters.get("name"), None);
		assert!(!panel.backspace(&mut filters));
	}

	#[test]
	fn choices_cycle_through_any() {
		let mut panel = FilterPanel::new(&SCHEMA);
		panel.focus_next();
		let mut filters = FilterSet::new();
		assert!(panel.cycle(&mut filters, true));
		assert_eq!(filters.get("tier"), Some("Gold"));
		assert!(panel.cycle(&mut filters, false));
		assert_eq!(filters.get("tier"), None);
		assert!(panel.cycle(&mut filters, false));
		assert_eq!(filters.get("tier"), Some("Silver"));
		assert!(panel.clear_focused(&mut filters));
		assert!(filters.is_identity());
	}

	#[test]
	fn flags_cycle_yes_then_no() {
		let mut panel = FilterPanel::new(&SCHEMA);
		panel.focus_previous();
		let mut filters = FilterSet::new();
		panel.cycle(&mut filters, true);
		assert_eq!(filters.get("active"), Some("Yes"));
		panel.cycle(&mut filters, true);
		assert_eq!(filters.get("active"), Some("No"));
	}
}
