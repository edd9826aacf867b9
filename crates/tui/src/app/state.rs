//! Core state container for the console.
//!
//! [`App`] owns the screen registry together with one view state per tab, the
//! search input, the open overlay and the toast.

use std::time::Instant;

use ratatui::widgets::TableState;
use serde::Serialize;
use tabula_record_api::{
	Notification, ProjectedPage, RecordId, Screen, ScreenRegistry, ShareRequest, Toast, ViewState,
};

use crate::components::{FilterPanel, FormView};
use crate::config::{ConsoleOptions, UiLabels};
use crate::input::SearchInput;
use crate::style::{StyleConfig, Theme};

/// Per-tab view state, kept while other tabs are active.
#[derive(Debug, Clone, Default)]
pub(crate) struct TabState {
	pub view: ViewState,
	pub table_state: TableState,
}

/// Modal drawn over the table. At most one is open.
#[derive(Debug, Clone, Default)]
pub(crate) enum Overlay {
	#[default]
	None,
	Form(FormView),
	Filters(FilterPanel),
	Share(ShareRequest),
}

/// Record count for one screen at the end of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenCount {
	pub id: &'static str,
	pub label: &'static str,
	pub records: usize,
}

/// What the console reports when the user quits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsoleOutcome {
	pub screens: Vec<ScreenCount>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) screens: ScreenRegistry,
	pub(crate) tabs: Vec<TabState>,
	pub(crate) active: usize,
	/// Text input bound to the active tab's free-text query.
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) overlay: Overlay,
	pub(crate) toast: Toast,
}

impl<'a> App<'a> {
	/// Construct an [`App`] over the registered screens.
	pub fn new(screens: ScreenRegistry, options: ConsoleOptions) -> Self {
		let tabs = screens
			.iter()
			.map(|_| TabState {
				view: ViewState::with_page_size(options.page_size),
				table_state: TableState::default(),
			})
			.collect();
		let active = options
			.start_screen
			.as_deref()
			.and_then(|id| screens.position(id))
			.unwrap_or(0);

		let mut app = Self {
			screens,
			tabs,
			active,
			search_input: SearchInput::default(),
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			overlay: Overlay::None,
			toast: Toast::new(options.toast_duration),
		};
		if let Some(tab) = app.tabs.get_mut(active) {
			tab.view.filters.set_query(options.initial_query);
		}
		app.sync_search_input();
		app.refresh();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.sync_search_input();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	pub(crate) fn active_screen(&self) -> Option<&dyn Screen> {
		self.screens.at(self.active)
	}

	pub(crate) fn active_tab(&self) -> Option<&TabState> {
		self.tabs.get(self.active)
	}

	pub(crate) fn active_tab_mut(&mut self) -> Option<&mut TabState> {
		self.tabs.get_mut(self.active)
	}

	/// Switch to the tab at `index`, wrapping at both ends.
	pub(crate) fn select_tab(&mut self, index: isize) {
		let len = self.tabs.len() as isize;
		if len == 0 {
			return;
		}
		self.active = index.rem_euclid(len) as usize;
		self.overlay = Overlay::None;
		self.sync_search_input();
		self.refresh();
	}

	/// The page of the active tab as currently filtered, sorted and paginated.
	pub(crate) fn current_page(&self) -> Option<ProjectedPage> {
		let screen = self.active_screen()?;
		let tab = self.active_tab()?;
		Some(screen.project(&tab.view))
	}

	/// Id of the highlighted row.
	pub(crate) fn selected_id(&self) -> Option<RecordId> {
		let selected = self.active_tab()?.table_state.selected()?;
		self.current_page()?.rows.get(selected).map(|row| row.id)
	}

	/// Clamp the page to the filtered records and keep the selection on a row.
	pub(crate) fn refresh(&mut self) {
		let Some(screen) = self.screens.at(self.active) else {
			return;
		};
		let Some(tab) = self.tabs.get_mut(self.active) else {
			return;
		};
		tab.view.clamp(screen.filtered_count(&tab.view));
		let rows = screen.project(&tab.view).rows.len();
		let selection = match (rows, tab.table_state.selected()) {
			(0, _) => None,
			(rows, Some(selected)) => Some(selected.min(rows - 1)),
			(_, None) => Some(0),
		};
		tab.table_state.select(selection);
	}

	pub(crate) fn notify(&mut self, notification: Notification) {
		self.toast.show(notification, Instant::now());
	}

	/// Load the active tab's query and hint into the search input.
	pub(crate) fn sync_search_input(&mut self) {
		let query = self
			.active_tab()
			.map(|tab| tab.view.filters.query().to_string())
			.unwrap_or_default();
		let hint = self
			.active_screen()
			.map(|screen| screen.descriptor().ui.hint)
			.unwrap_or_default();
		self.search_input.set_text(query);
		self.search_input
			.set_placeholder(hint, self.style.theme.empty_style());
	}

	/// Record counts per screen, in tab order.
	#[must_use]
	pub fn outcome(&self) -> ConsoleOutcome {
		ConsoleOutcome {
			screens: self
				.screens
				.iter()
				.map(|screen| ScreenCount {
					id: screen.descriptor().id,
					label: screen.descriptor().ui.count_label,
					records: screen.total_count(),
				})
				.collect(),
		}
	}

	/// Id of the screen in the active tab.
	#[must_use]
	pub fn active_screen_id(&self) -> Option<&'static str> {
		self.active_screen().map(|screen| screen.descriptor().id)
	}

	/// Message of the visible toast, if any.
	#[must_use]
	pub fn toast_message(&self) -> Option<&str> {
		self.toast
			.current()
			.map(|notification| notification.message.as_str())
	}
}
