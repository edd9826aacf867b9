//! The filter, sort and paginate pipeline behind every table.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::collection::Collection;
use crate::filter::{FilterSet, apply_filters};
use crate::page::{PageInfo, clamp_page, default_page_size, paginate, total_pages};
use crate::sort::{SortSpec, apply_sort};
use crate::types::{FieldValue, Record, RecordId};

/// Filters, ordering and page position of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
	pub filters: FilterSet,
	pub sort: SortSpec,
	/// 1-indexed page number.
	pub page: usize,
	pub page_size: NonZeroUsize,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			filters: FilterSet::default(),
			sort: SortSpec::default(),
			page: 1,
			page_size: default_page_size(),
		}
	}
}

impl ViewState {
	#[must_use]
	pub fn with_page_size(page_size: NonZeroUsize) -> Self {
		Self {
			page_size,
			..Self::default()
		}
	}

	/// Clamp the page number against the current filtered count.
	pub fn clamp(&mut self, filtered_len: usize) {
		self.page = clamp_page(self.page, filtered_len, self.page_size);
	}

	/// Advance one page if possible. Returns whether the page changed.
	pub fn next_page(&mut self, filtered_len: usize) -> bool {
		let last = total_pages(filtered_len, self.page_size);
		if self.page < last {
			self.page += 1;
			true
		} else {
			false
		}
	}

	/// Go back one page if possible. Returns whether the page changed.
	pub fn previous_page(&mut self) -> bool {
		if self.page > 1 {
			self.page -= 1;
			true
		} else {
			false
		}
	}

	/// Return to the first page, as after any change to filters or sort.
	pub fn reset_page(&mut self) {
		self.page = 1;
	}
}

/// One page of typed records together with its position.
#[derive(Debug)]
pub struct ViewPage<'a, R> {
	pub rows: Vec<&'a R>,
	pub info: PageInfo,
}

/// Filter and sort without paginating.
#[must_use]
pub fn arrange<'a, R: Record>(records: &'a Collection<R>, state: &ViewState) -> Vec<&'a R> {
	let filtered = apply_filters(records.as_slice(), &state.filters);
	apply_sort(filtered, &state.sort)
}

/// Run the full pipeline: filter, sort, then cut out `state.page`.
///
/// The page number is used as given. Out-of-range pages produce no rows.
#[must_use]
pub fn project<'a, R: Record>(records: &'a Collection<R>, state: &ViewState) -> ViewPage<'a, R> {
	let arranged = arrange(records, state);
	let info = PageInfo::new(state.page, state.page_size, arranged.len());
	let rows = paginate(&arranged, state.page, state.page_size).to_vec();
	ViewPage { rows, info }
}

/// A rendered row with its cells in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedRow {
	pub id: RecordId,
	pub cells: Vec<FieldValue>,
}

impl ProjectedRow {
	#[must_use]
	pub fn from_record<R: Record>(record: &R) -> Self {
		let cells = R::schema()
			.fields
			.iter()
			.map(|def| record.field(def.name).unwrap_or(FieldValue::Text(String::new())))
			.collect();
		Self {
			id: record.id(),
			cells,
		}
	}
}

/// Type-erased page used by screens, the terminal UI and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedPage {
	pub rows: Vec<ProjectedRow>,
	pub info: PageInfo,
}

impl<R: Record> From<ViewPage<'_, R>> for ProjectedPage {
	fn from(page: ViewPage<'_, R>) -> Self {
		Self {
			rows: page.rows.into_iter().map(ProjectedRow::from_record).collect(),
			info: page.info,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collection::tests::{NOTE_SCHEMA, note};
	use crate::types::{FieldValue, RecordId};

	fn many(count: u64) -> Collection<crate::collection::tests::Note> {
		Collection::seeded(
			(1..=count)
				.map(|id| note(id, &format!("Note {id}"), if id % 2 == 0 { "Home" } else { "Work" }, 1))
				.collect(),
		)
	}

	#[test]
	fn pipeline_filters_then_sorts_then_pages() {
		let records = many(12);
		let mut state = ViewState::default();
		state.filters.set(&NOTE_SCHEMA, "topic", "Home").unwrap();
		state.sort = SortSpec::parse(&NOTE_SCHEMA, "title:desc").unwrap();

		let page = project(&records, &state);
		assert_eq!(page.info.total_items, 6);
		assert_eq!(page.info.total_pages, 2);
		let titles: Vec<_> = page.rows.iter().map(|n| n.title.as_str()).collect();
		assert_eq!(titles, vec!["Note 8", "Note 6", "Note 4", "Note 2", "Note 12"]);
	}

	#[test]
	fn clamp_pulls_the_page_back_after_filtering() {
		let records = many(12);
		let mut state = ViewState {
			page: 3,
			..ViewState::default()
		};
		assert_eq!(project(&records, &state).rows.len(), 2);

		state.filters.set(&NOTE_SCHEMA, "title", "Note 1").unwrap();
		assert!(project(&records, &state).rows.is_empty());
		let filtered = arrange(&records, &state).len();
		state.clamp(filtered);
		assert_eq!(state.page, 1);
		assert_eq!(project(&records, &state).rows.len(), 4);
	}

	#[test]
	fn page_navigation_respects_bounds() {
		let mut state = ViewState::default();
		assert!(!state.previous_page());
		assert!(state.next_page(7));
		assert!(!state.next_page(7));
		assert_eq!(state.page, 2);
		state.reset_page();
		assert_eq!(state.page, 1);
	}

	#[test]
	fn projected_rows_follow_schema_order() {
		let records = many(1);
		let page: ProjectedPage = project(&records, &ViewState::default()).into();
		assert_eq!(page.rows.len(), 1);
		assert_eq!(page.rows[0].id, RecordId(1));
		assert_eq!(page.rows[0].cells[0], FieldValue::text("Note 1"));
		assert_eq!(page.rows[0].cells.len(), NOTE_SCHEMA.fields.len());
	}
}
