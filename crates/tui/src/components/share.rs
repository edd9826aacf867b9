use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tabula_record_api::ShareRequest;

use super::popup_area;
use crate::style::Theme;

const PICKER_WIDTH: u16 = 48;

/// Render the recipient picker for a share request.
pub fn render_share_picker(frame: &mut Frame, area: Rect, request: &ShareRequest, theme: &Theme) {
	let lines = picker_lines(request, theme);
	let popup = popup_area(area, PICKER_WIDTH, lines.len() as u16 + 2);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(
			format!(" Share \"{}\" ", request.label),
			theme.header_style(),
		));
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn picker_lines(request: &ShareRequest, theme: &Theme) -> Vec<Line<'static>> {
	let mut lines: Vec<Line<'static>> = if request.recipients.is_empty() {
		vec![Line::from(Span::styled(
			"  Nobody to share with",
			theme.empty_style(),
		))]
	} else {
		request
			.recipients
			.iter()
			.enumerate()
			.map(|(index, name)| {
				if index == request.selected {
					Line::from(vec![
						Span::styled("▶ ", theme.highlight),
						Span::styled(name.clone(), theme.row_highlight),
					])
				} else {
					Line::from(vec![Span::raw("  "), Span::styled(name.clone(), Style::default())])
				}
			})
			.collect()
	};
	lines.push(Line::default());
	lines.push(Line::from(Span::styled(
		"  Enter share · ↑/↓ choose · Esc cancel",
		theme.empty_style(),
	)));
	lines
}

#[cfg(test)]
mod tests {
	use tabula_record_api::RecordId;

	use super::*;

	fn text(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn selected_recipient_is_marked() {
		let mut request = ShareRequest::new(RecordId(3), "Budget.xlsx", &["Ana", "Bo"]);
		request.select_next();
		let lines = picker_lines(&request, &Theme::default());
		assert_eq!(text(&lines[0]), "  Ana");
		assert_eq!(text(&lines[1]), "▶ Bo");
	}

	#[test]
	fn empty_recipient_lists_say_so() {
		let request = ShareRequest::new(RecordId(3), "Budget.xlsx", &[]);
		let lines = picker_lines(&request, &Theme::default());
		assert_eq!(text(&lines[0]).trim(), "Nobody to share with");
	}
}
