//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// The search prompt. Multi-line input is refused.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			focused: false,
		};
		input.set_text(initial);
		input
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let line = text.lines().next().unwrap_or_default().to_string();
		let placeholder = self.textarea.placeholder_text().to_string();
		let placeholder_style = self.textarea.placeholder_style();

		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		if let Some(style) = placeholder_style {
			textarea.set_placeholder_style(style);
		}
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_cursor();
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor();
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Render the input into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyEvent;

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = SearchInput::new("ab");
		assert!(input.input(key(KeyCode::Char('c'))));
		assert_eq!(input.text(), "abc");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn newlines_are_refused() {
		let mut input = SearchInput::new("one");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "one");
	}

	#[test]
	fn set_text_keeps_the_first_line() {
		let mut input = SearchInput::default();
		input.set_text("first\nsecond");
		assert_eq!(input.text(), "first");
		input.set_text("");
		assert_eq!(input.text(), "");
	}
}
