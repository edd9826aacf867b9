use ratatui::layout::Constraint;
use ratatui::widgets::{Cell, Row};
use tabula_record_api::{ProjectedRow, Schema};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Column constraints derived from each field's relative width.
#[must_use]
pub fn column_constraints(schema: &Schema) -> Vec<Constraint> {
	schema
		.fields
		.iter()
		.map(|def| Constraint::Fill(def.width.max(1)))
		.collect()
}

/// Build table rows for one page of records.
///
/// Cells wider than their resolved column are cut with an ellipsis.
#[must_use]
pub fn build_record_rows(rows: &[ProjectedRow], column_widths: Option<&[u16]>) -> Vec<Row<'static>> {
	rows.iter()
		.map(|row| {
			let cells = row.cells.iter().enumerate().map(|(index, value)| {
				let text = value.display();
				let width = column_widths.and_then(|widths| widths.get(index).copied());
				Cell::from(match width {
					Some(width) => truncate_to_width(&text, usize::from(width)),
					None => text,
				})
			});
			Row::new(cells)
		})
		.collect()
}

fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = text.unicode_truncate(width - ELLIPSIS.width());
	format!("{head}{ELLIPSIS}")
}
