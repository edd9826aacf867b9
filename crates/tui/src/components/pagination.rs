use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tabula_record_api::PageInfo;

use crate::style::Theme;

/// Argument bundle for the footer row.
pub struct FooterContext<'a> {
	pub info: &'a PageInfo,
	/// Key and description pairs, shown right-aligned.
	pub hints: &'a [(&'a str, &'a str)],
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the page status on the left and key hints on the right.
pub fn render_footer(frame: &mut Frame, footer: FooterContext<'_>) {
	let FooterContext {
		info,
		hints,
		area,
		theme,
	} = footer;

	let status = page_status(info);
	let [status_area, hints_area] = Layout::horizontal([
		Constraint::Length(Line::from(status.as_str()).width() as u16 + 2),
		Constraint::Min(0),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(status).style(theme.prompt_style()),
		status_area,
	);
	frame.render_widget(
		Paragraph::new(hint_line(hints, theme)).alignment(Alignment::Right),
		hints_area,
	);
}

/// Status line with arrows marking which directions have more pages.
pub(crate) fn page_status(info: &PageInfo) -> String {
	let previous = if info.has_previous() { "◀ " } else { "" };
	let next = if info.has_next() { " ▶" } else { "" };
	format!("{previous}{}{next}", info.status_line())
}

fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
	let mut spans = Vec::with_capacity(hints.len() * 3);
	for (index, (key, label)) in hints.iter().enumerate() {
		if index > 0 {
			spans.push(Span::styled(" · ", theme.empty_style()));
		}
		spans.push(Span::styled(*key, theme.highlight));
		spans.push(Span::styled(format!(" {label}"), theme.empty_style()));
	}
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use std::num::NonZeroUsize;

	use super::*;

	fn info(number: usize, total: usize) -> PageInfo {
		PageInfo::new(number, NonZeroUsize::new(5).unwrap(), total)
	}

	#[test]
	fn status_marks_available_directions() {
		assert_eq!(page_status(&info(1, 7)), "Page 1 of 2 · 7 items ▶");
		assert_eq!(page_status(&info(2, 7)), "◀ Page 2 of 2 · 7 items");
		assert_eq!(page_status(&info(1, 1)), "Page 1 of 1 · 1 item");
	}

	#[test]
	fn hints_are_separated() {
		let theme = Theme::default();
		let line = hint_line(&[("a", "add"), ("d", "delete")], &theme);
		let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, "a add · d delete");
	}
}
