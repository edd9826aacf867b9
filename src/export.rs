//! Headless rendering of one table page, for scripts and quick checks.

use std::num::NonZeroUsize;

use serde::Serialize;
use serde_json::{Map, Value};
use tabula_record_api::{PageInfo, RecordId, ScreenRegistry, SortSpec, ViewError, ViewState};
use thiserror::Error;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
	#[error("unknown screen `{id}` (available: {available})")]
	UnknownScreen { id: String, available: String },
	#[error(transparent)]
	View(#[from] ViewError),
}

/// Which page of which screen to render, and how to narrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
	pub screen: String,
	/// `(field, value)` pairs applied as column filters.
	pub filters: Vec<(String, String)>,
	pub query: String,
	pub sort: Option<String>,
	/// 1-indexed; clamped to the last page.
	pub page: usize,
	pub page_size: NonZeroUsize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedRow {
	pub id: RecordId,
	/// Display strings keyed by field name, in schema order.
	pub cells: Map<String, Value>,
}

/// One rendered page plus the counts shown around the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedPage {
	pub screen: &'static str,
	pub title: &'static str,
	pub headers: Vec<&'static str>,
	pub rows: Vec<ExportedRow>,
	pub page: PageInfo,
	pub filtered: usize,
	pub total: usize,
	pub sort: String,
}

/// Apply the request's filters, sort and page to a registered screen.
pub fn export_page(
	registry: &ScreenRegistry,
	request: &ExportRequest,
) -> Result<ExportedPage, ExportError> {
	let screen = registry
		.get(&request.screen)
		.ok_or_else(|| ExportError::UnknownScreen {
			id: request.screen.clone(),
			available: registry
				.descriptors()
				.map(|descriptor| descriptor.id)
				.collect::<Vec<_>>()
				.join(", "),
		})?;
	let schema = screen.schema();

	let mut state = ViewState::with_page_size(request.page_size);
	for (field, value) in &request.filters {
		state.filters.set(schema, field, value)?;
	}
	state.filters.set_query(request.query.clone());
	if let Some(sort) = request.sort.as_deref() {
		state.sort = SortSpec::parse(schema, sort)?;
	}
	state.page = request.page;

	let filtered = screen.filtered_count(&state);
	state.clamp(filtered);
	let page = screen.project(&state);
	debug!(
		screen = %request.screen,
		filtered,
		page = page.info.number,
		"exported page"
	);

	let rows = page
		.rows
		.into_iter()
		.map(|row| ExportedRow {
			id: row.id,
			cells: schema
				.fields
				.iter()
				.zip(&row.cells)
				.map(|(def, value)| (def.name.to_string(), Value::String(value.display())))
				.collect(),
		})
		.collect();

	Ok(ExportedPage {
		screen: screen.descriptor().id,
		title: screen.descriptor().ui.title,
		headers: schema.headers(),
		rows,
		page: page.info,
		filtered,
		total: screen.total_count(),
		sort: state.sort.describe(schema),
	})
}

impl ExportedPage {
	/// Aligned columns under a title, followed by the page status line.
	#[must_use]
	pub fn to_plain(&self) -> String {
		let mut table: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
		table.push(
			std::iter::once("ID".to_string())
				.chain(self.headers.iter().map(|header| (*header).to_string()))
				.collect(),
		);
		for row in &self.rows {
			table.push(
				std::iter::once(row.id.to_string())
					.chain(
						row.cells
							.values()
							.map(|value| value.as_str().unwrap_or_default().to_string()),
					)
					.collect(),
			);
		}

		let columns = table.first().map_or(0, Vec::len);
		let widths: Vec<usize> = (0..columns)
			.map(|column| {
				table
					.iter()
					.filter_map(|line| line.get(column))
					.map(|cell| cell.width())
					.max()
					.unwrap_or(0)
			})
			.collect();

		let mut out = format!(
			"{} · {} of {} · {}\n",
			self.title, self.filtered, self.total, self.sort
		);
		for line in &table {
			let cells: Vec<String> = line
				.iter()
				.zip(&widths)
				.map(|(cell, width)| pad(cell, *width))
				.collect();
			out.push_str(cells.join(COLUMN_GAP).trim_end());
			out.push('\n');
		}
		out.push_str(&self.page.status_line());
		out
	}
}

fn pad(cell: &str, width: usize) -> String {
	let fill = width.saturating_sub(cell.width());
	format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
	use tabula_record_api::default_page_size;

	use super::*;
	use crate::catalog;

	fn request(screen: &str) -> ExportRequest {
		ExportRequest {
			screen: screen.to_string(),
			filters: Vec::new(),
			query: String::new(),
			sort: None,
			page: 1,
			page_size: default_page_size(),
		}
	}

	#[test]
	fn industry_filter_selects_the_it_client() {
		let registry = catalog::registry().expect("registry");
		let mut request = request("clients");
		request.filters.push(("industry".into(), "IT".into()));
		let page = export_page(&registry, &request).expect("export");
		assert_eq!(page.filtered, 1);
		assert_eq!(page.total, 5);
		assert_eq!(page.rows[0].cells["name"], "Tech Solutions Inc");
	}

	#[test]
	fn pages_past_the_end_are_clamped() {
		let registry = catalog::registry().expect("registry");
		let mut request = request("files");
		request.page = 9;
		let page = export_page(&registry, &request).expect("export");
		assert_eq!(page.page.number, 2);
		assert_eq!(page.rows.len(), 2);
	}

	#[test]
	fn recent_sort_orders_newest_first() {
		let registry = catalog::registry().expect("registry");
		let mut request = request("files");
		request.sort = Some("recent:added".into());
		let page = export_page(&registry, &request).expect("export");
		let added: Vec<_> = page
			.rows
			.iter()
			.map(|row| row.cells["added_on"].as_str().unwrap_or_default().to_string())
			.collect();
		assert!(added.windows(2).all(|pair| pair[0] >= pair[1]));
	}

	#[test]
	fn unknown_inputs_are_reported() {
		let registry = catalog::registry().expect("registry");
		let err = export_page(&registry, &request("invoices")).unwrap_err();
		assert!(matches!(err, ExportError::UnknownScreen { .. }));
		assert!(err.to_string().contains("clients"));

		let mut bad_field = request("clients");
		bad_field.filters.push(("revenue".into(), "1".into()));
		assert!(matches!(
			export_page(&registry, &bad_field),
			Err(ExportError::View(_))
		));
	}

	#[test]
	fn plain_output_aligns_columns() {
		let registry = catalog::registry().expect("registry");
		let mut request = request("folders");
		request.query = "re".into();
		let page = export_page(&registry, &request).expect("export");
		let plain = page.to_plain();
		let lines: Vec<_> = plain.lines().collect();
		assert!(lines[0].starts_with("Folders · "));
		assert!(lines[1].starts_with("ID  Folder name"));
		assert!(lines.iter().any(|line| line.contains("Reports")));
		assert_eq!(lines.last().copied(), Some(page.page.status_line().as_str()));
	}
}
