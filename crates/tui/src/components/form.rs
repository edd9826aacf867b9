use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tabula_record_api::{FieldDef, FieldKind, FormSession, Schema};
use unicode_width::UnicodeWidthStr;

use super::popup_area;
use crate::style::Theme;

const FORM_WIDTH: u16 = 64;

/// An open form modal: the session plus which field has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
	pub session: FormSession,
	pub title: String,
	schema: &'static Schema,
	focus: usize,
}

impl FormView {
	#[must_use]
	pub fn new(session: FormSession, schema: &'static Schema, noun: &str) -> Self {
		Self {
			title: session.mode.title(noun),
			session,
			schema,
			focus: 0,
		}
	}

	/// Fields shown by the form, in form order.
	#[must_use]
	pub fn fields(&self) -> Vec<&'static FieldDef> {
		self.session
			.draft
			.fields()
			.filter_map(|name| self.schema.field(name))
			.collect()
	}

	#[must_use]
	pub fn focused_field(&self) -> Option<&'static FieldDef> {
		self.fields().get(self.focus).copied()
	}

	/// Whether the focused field is a choice or flag, which cycle instead of taking text.
	#[must_use]
	pub fn focus_is_toggle(&self) -> bool {
		self.focused_field().is_some_and(is_toggle)
	}

	#[must_use]
	pub fn focus(&self) -> usize {
		self.focus
	}

	pub fn focus_next(&mut self) {
		let len = self.fields().len();
		if len > 0 {
			self.focus = (self.focus + 1) % len;
		}
	}

	pub fn focus_previous(&mut self) {
		let len = self.fields().len();
		if len > 0 {
			self.focus = (self.focus + len - 1) % len;
		}
	}

	/// Append a character to a text-like field.
	pub fn type_char(&mut self, ch: char) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		if is_toggle(def) {
			return false;
		}
		let mut value = self.session.draft.get(def.name).unwrap_or_default().to_string();
		value.push(ch);
		self.session.set_input(def.name, value)
	}

	pub fn backspace(&mut self) -> bool {
		let Some(def) = self.focused_field() else {
			return false;
		};
		let mut value = self.session.draft.get(def.name).unwrap_or_default().to_string();
		if value.pop().is_none() {
			return false;
		}
		self.session.set_input(def.name, value)
	}

	/// Step the focused choice or flip the focused flag.
	pub fn cycle(&mut self, forward: bool) -> bool {
		if !self.session.mode.inputs_enabled() {
			return false;
		}
		let Some(def) = self.focused_field() else {
			return false;
		};
		let changed = self.session.draft.cycle_choice(def, forward);
		if changed {
			self.session.errors.remove(def.name);
		}
		changed
	}
}

fn is_toggle(def: &FieldDef) -> bool {
	def.kind.options().is_some() || def.kind == FieldKind::Flag
}

/// Render the form modal centred in `area`.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormView, theme: &Theme) {
	let lines = form_lines(form, theme);
	let height = lines.len() as u16 + 2;
	let popup = popup_area(area, FORM_WIDTH, height);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {} ", form.title), theme.header_style()));
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn form_lines(form: &FormView, theme: &Theme) -> Vec<Line<'static>> {
	let fields = form.fields();
	let enabled = form.session.mode.inputs_enabled();
	let errors = form.session.visible_errors();
	let label_width = fields
		.iter()
		.map(|def| def.label.width() + usize::from(def.required))
		.max()
		.unwrap_or_default();

	let mut lines = Vec::with_capacity(fields.len() + 2);
	for (index, def) in fields.iter().enumerate() {
		let focused = enabled && index == form.focus;
		let marker = if focused { "▶ " } else { "  " };
		let label = if def.required {
			format!("{}*", def.label)
		} else {
			def.label.to_string()
		};
		let value = form.session.draft.get(def.name).unwrap_or_default();
		let value = match def.kind {
			FieldKind::Choice(_) | FieldKind::Flag if focused => format!("◀ {value} ▶"),
			_ if focused => format!("{value}▏"),
			_ => value.to_string(),
		};
		let value_style = if !enabled {
			theme.empty_style()
		} else if focused {
			theme.highlight
		} else {
			Style::default()
		};
		lines.push(Line::from(vec![
			Span::styled(marker, theme.highlight),
			Span::styled(format!("{label:<label_width$}  "), theme.border_style()),
			Span::styled(value, value_style),
		]));

		if let Some(message) = errors.and_then(|errors| errors.get(def.name)) {
			let indent = " ".repeat(label_width + 4);
			lines.push(Line::from(Span::styled(
				format!("{indent}{message}"),
				theme.error,
			)));
		}
	}

	lines.push(Line::default());
	let hint = if form.session.mode.shows_submit() {
		"Enter save · ↑/↓ field · ←/→ choose · Esc cancel"
	} else {
		"Esc close"
	};
	lines.push(Line::from(Span::styled(format!("  {hint}"), theme.empty_style())));
	lines
}

#[cfg(test)]
mod tests {
	use tabula_record_api::{FormMode, RecordId, ValidationStyle};

	use super::*;

	static FIELDS: &[FieldDef] = &[
		FieldDef::new("name", "Name", FieldKind::Text).required(),
		FieldDef::new("tier", "Tier", FieldKind::Choice(&["Gold", "Silver"])),
		FieldDef::new("active", "Active", FieldKind::Flag),
	];
	static SCHEMA: Schema = Schema {
		fields: FIELDS,
		recent: &[],
	};

	fn form() -> FormView {
		FormView::new(FormSession::create(&SCHEMA, ValidationStyle::Inline), &SCHEMA, "member")
	}

	#[test]
	fn typing_targets_the_focused_text_field() {
		let mut form = form();
		assert_eq!(form.title, "New member");
		assert!(form.type_char('A'));
		assert!(form.type_char('l'));
		assert!(form.backspace());
		assert_eq!(form.session.draft.get("name"), Some("A"));
	}

	#[test]
	fn choices_cycle_and_refuse_typing() {
		let mut form = form();
		form.focus_next();
		assert!(!form.type_char('x'));
		assert!(form.cycle(true));
		assert_eq!(form.session.draft.get("tier"), Some("Gold"));
		assert!(form.cycle(true));
		assert_eq!(form.session.draft.get("tier"), Some("Silver"));
		form.focus_next();
		assert!(form.cycle(true));
		assert_eq!(form.session.draft.get("active"), Some("Yes"));
		form.focus_next();
		assert_eq!(form.focus(), 0);
	}

	#[test]
	fn view_forms_hide_the_submit_hint() {
		let mut session = FormSession::create(&SCHEMA, ValidationStyle::Inline);
		session.mode = FormMode::View(RecordId(1));
		let form = FormView::new(session, &SCHEMA, "member");
		let lines = form_lines(&form, &Theme::default());
		let last: String = lines
			.last()
			.map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
			.unwrap_or_default();
		assert_eq!(last.trim(), "Esc close");
	}
}
