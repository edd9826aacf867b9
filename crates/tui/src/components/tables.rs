use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::Always;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Message shown in place of rows when there are none.
	pub empty_message: &'a str,
}

/// Render a bordered table with a header separator.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let empty = spec.rows.is_empty();
	let empty_message = spec.empty_message;
	render_configured_table(frame, inner, table_state, theme, spec);

	if empty && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let message = Paragraph::new(empty_message)
			.style(theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(message, message_area);
	}
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.border_style());
	let spans = vec![Span::raw(" "), middle, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn render(spec: TableSpec<'_>) -> Vec<String> {
		let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
		let mut state = TableState::default();
		let theme = Theme::default();
		terminal
			.draw(|frame| render_table(frame, frame.area(), &mut state, spec, &theme))
			.unwrap();
		let buffer = terminal.backend().buffer();
		(0..buffer.area.height)
			.map(|y| {
				(0..buffer.area.width)
					.map(|x| buffer[(x, y)].symbol())
					.collect::<String>()
			})
			.collect()
	}

	#[test]
	fn header_is_followed_by_a_separator() {
		let lines = render(TableSpec {
			headers: vec!["Name".into(), "City".into()],
			widths: vec![Constraint::Fill(1), Constraint::Fill(1)],
			rows: vec![Row::new(["Acme", "Oslo"])],
			title: Some(" Clients ".into()),
			empty_message: "No records",
		});
		assert!(lines[0].contains("Clients"));
		assert!(lines[1].contains("Name"));
		assert!(lines[2].contains("───"));
		assert!(lines[3].contains("Acme"));
	}

	#[test]
	fn empty_tables_show_the_message() {
		let lines = render(TableSpec {
			headers: vec!["Name".into()],
			widths: Vec::new(),
			rows: Vec::new(),
			title: None,
			empty_message: "No records",
		});
		assert!(lines[3].contains("No records"));
	}
}
