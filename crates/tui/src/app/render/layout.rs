use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING};

/// Widths the table will give each column inside a bordered `area`.
pub(crate) fn resolve_column_widths(area: Rect, widths: &[Constraint]) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	let table_width = area.width.saturating_sub(2);
	if table_width == 0 {
		return Vec::new();
	}

	let highlight_width = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn column_widths_use_table_inner_area() {
		let area = Rect::new(0, 0, 12, 5);
		let resolved = resolve_column_widths(area, &[Constraint::Length(20)]);
		assert_eq!(resolved, vec![area.width - 2 - HIGHLIGHT_SYMBOL.width() as u16]);
	}

	#[test]
	fn fill_weights_share_the_remaining_width() {
		let area = Rect::new(0, 0, 43, 5);
		let resolved = resolve_column_widths(area, &[Constraint::Fill(2), Constraint::Fill(1)]);
		let total: u16 = resolved.iter().sum::<u16>() + TABLE_COLUMN_SPACING;
		assert_eq!(total, 43 - 2 - 2);
		assert!(resolved[0] > resolved[1]);
	}

	#[test]
	fn empty_inputs_resolve_to_nothing() {
		assert!(resolve_column_widths(Rect::new(0, 0, 0, 5), &[Constraint::Fill(1)]).is_empty());
		assert!(resolve_column_widths(Rect::new(0, 0, 30, 5), &[]).is_empty());
	}
}
