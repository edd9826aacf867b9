//! Fixed-size windows over the filtered and sorted records.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// [`DEFAULT_PAGE_SIZE`] as a non-zero value.
#[must_use]
pub const fn default_page_size() -> NonZeroUsize {
	match NonZeroUsize::new(DEFAULT_PAGE_SIZE) {
		Some(size) => size,
		None => NonZeroUsize::MIN,
	}
}

/// Number of pages needed for `len` items. An empty list still has one page.
#[must_use]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
	len.div_ceil(page_size.get()).max(1)
}

/// Return the 1-indexed page of `items`.
///
/// Page 0 and pages past the end yield an empty slice; clamping is the
/// caller's job.
#[must_use]
pub fn paginate<T>(items: &[T], page_number: usize, page_size: NonZeroUsize) -> &[T] {
	let Some(index) = page_number.checked_sub(1) else {
		return &[];
	};
	let size = page_size.get();
	let start = index.saturating_mul(size);
	if start >= items.len() {
		return &[];
	}
	let end = start.saturating_add(size).min(items.len());
	&items[start..end]
}

/// Clamp a page number into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page_number: usize, len: usize, page_size: NonZeroUsize) -> usize {
	page_number.clamp(1, total_pages(len, page_size))
}

/// Position of the current page, as shown by pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
	pub number: usize,
	pub size: usize,
	pub total_pages: usize,
	pub total_items: usize,
}

impl PageInfo {
	#[must_use]
	pub fn new(number: usize, page_size: NonZeroUsize, total_items: usize) -> Self {
		Self {
			number,
			size: page_size.get(),
			total_pages: total_pages(total_items, page_size),
			total_items,
		}
	}

	#[must_use]
	pub const fn has_next(&self) -> bool {
		self.number < self.total_pages
	}

	#[must_use]
	pub const fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// e.g. `Page 1 of 2 · 7 items`.
	#[must_use]
	pub fn status_line(&self) -> String {
		let noun = if self.total_items == 1 { "item" } else { "items" };
		format!(
			"Page {} of {} · {} {noun}",
			self.number, self.total_pages, self.total_items
		)
	}
}
