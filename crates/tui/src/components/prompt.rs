use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Label rendered before the `>` separator.
	pub prompt: &'a str,
	/// Right-aligned view summary, such as the active sort.
	pub status: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt, the search input and the right-aligned status.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		prompt,
		status,
		area,
		theme,
	} = input;

	let [prompt_area, input_area] = Layout::horizontal([
		Constraint::Length(prompt_width(prompt)),
		Constraint::Min(1),
	])
	.areas(area);

	if !prompt.is_empty() {
		let style = if search_input.is_focused() {
			theme.highlight
		} else {
			theme.prompt_style()
		};
		let widget = Paragraph::new(format!("{prompt} > ")).style(style);
		frame.render_widget(widget, prompt_area);
	}

	search_input.render_textarea(frame, input_area);
	render_status(frame, input_area, status, theme);
}

fn prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		Line::from(prompt).width() as u16 + 3
	}
}

/// Place the status at the right edge, keeping clear of the typed query.
fn render_status(frame: &mut Frame, area: Rect, status: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || status.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(status.to_string(), theme.empty_style()));
	let line_width = line.width() as u16;

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
