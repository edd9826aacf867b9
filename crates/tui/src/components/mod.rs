//! UI building blocks shared across rendering and state modules.

/// Filter panel overlay.
pub mod filters;
/// Create, edit and view form modal.
pub mod form;
/// Toast rendering.
pub mod notification;
/// Page status footer and key hints.
pub mod pagination;
/// Search prompt rendering with the view status.
pub mod prompt;
/// Table row construction and truncation.
pub mod rows;
/// Share recipient picker.
pub mod share;
/// Table rendering and configuration.
pub mod tables;
/// Tab bar across the registered screens.
pub mod tabs;

pub use filters::{FilterPanel, render_filter_panel};
pub use form::{FormView, render_form};
pub use notification::render_toast;
pub use pagination::{FooterContext, render_footer};
pub use prompt::{InputContext, render_input};
pub use rows::build_record_rows;
pub use share::render_share_picker;
pub use tables::{TableSpec, render_table};
pub use tabs::{TabItem, render_tabs};

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centre a `width` x `height` box inside `area`, shrinking it to fit.
#[must_use]
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
	let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(vertical);
	popup
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn popups_are_centred_and_clamped() {
		let area = Rect::new(0, 0, 80, 24);
		let popup = popup_area(area, 40, 10);
		assert_eq!(popup, Rect::new(20, 7, 40, 10));

		let clamped = popup_area(Rect::new(0, 0, 20, 5), 40, 10);
		assert_eq!(clamped, Rect::new(0, 0, 20, 5));
	}
}
