use anyhow::Result;
use chrono::Local;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tabula_record_api::{
	Notification, RowAction, Schema, ScreenAction, SortDirection, SortKey, SortSpec, SubmitOutcome,
};
use tracing::{debug, info};

use super::App;
use super::state::{ConsoleOutcome, Overlay};
use crate::components::{FilterPanel, FormView};

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome if the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ConsoleOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome()));
		}

		match self.overlay {
			Overlay::Form(_) => self.handle_form_key(key),
			Overlay::Filters(_) => self.handle_filter_key(key),
			Overlay::Share(_) => self.handle_share_key(key),
			Overlay::None if self.search_input.is_focused() => self.handle_search_key(key),
			Overlay::None => return self.handle_table_key(key),
		}
		Ok(None)
	}

	fn handle_table_key(&mut self, key: KeyEvent) -> Result<Option<ConsoleOutcome>> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Ok(Some(self.outcome())),
			KeyCode::Tab => self.select_tab(self.active as isize + 1),
			KeyCode::BackTab => self.select_tab(self.active as isize - 1),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Left | KeyCode::PageUp => self.previous_page(),
			KeyCode::Right | KeyCode::PageDown => self.next_page(),
			KeyCode::Enter | KeyCode::Char('v') => self.row_action(RowAction::View),
			KeyCode::Char('e') => self.row_action(RowAction::Edit),
			KeyCode::Char('d') | KeyCode::Delete => self.row_action(RowAction::Delete),
			KeyCode::Char('s') => self.row_action(RowAction::Share),
			KeyCode::Char('a') => self.open_create_form(),
			KeyCode::Char('f') => self.open_filter_panel(),
			KeyCode::Char('c') => self.clear_filters(),
			KeyCode::Char('o') => self.cycle_column_sort(),
			KeyCode::Char('r') => self.cycle_recent_sort(),
			KeyCode::Char('x') => {
				self.toast.dismiss();
			}
			KeyCode::Char('/') => self.search_input.set_focused(true),
			_ => {}
		}
		Ok(None)
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.search_input.set_focused(false),
			_ => {
				if self.search_input.input(key) {
					let query = self.search_input.text().to_string();
					if let Some(tab) = self.active_tab_mut() {
						tab.view.filters.set_query(query);
						tab.view.reset_page();
					}
					self.refresh();
				}
			}
		}
	}

	fn handle_form_key(&mut self, key: KeyEvent) {
		let Overlay::Form(form) = &mut self.overlay else {
			return;
		};
		let editable = form.session.mode.inputs_enabled();
		match key.code {
			KeyCode::Esc => self.overlay = Overlay::None,
			KeyCode::Enter if editable => self.submit_form(),
			KeyCode::Enter => self.overlay = Overlay::None,
			KeyCode::Down | KeyCode::Tab => form.focus_next(),
			KeyCode::Up | KeyCode::BackTab => form.focus_previous(),
			KeyCode::Left => {
				form.cycle(false);
			}
			KeyCode::Right => {
				form.cycle(true);
			}
			KeyCode::Backspace => {
				form.backspace();
			}
			KeyCode::Char(' ') if form.focus_is_toggle() => {
				form.cycle(true);
			}
			KeyCode::Char(ch) => {
				form.type_char(ch);
			}
			_ => {}
		}
	}

	fn handle_filter_key(&mut self, key: KeyEvent) {
		let Overlay::Filters(panel) = &mut self.overlay else {
			return;
		};
		let Some(tab) = self.tabs.get_mut(self.active) else {
			return;
		};
		let filters = &mut tab.view.filters;
		let changed = match key.code {
			KeyCode::Esc | KeyCode::Enter => {
				self.overlay = Overlay::None;
				false
			}
			KeyCode::Down | KeyCode::Tab => {
				panel.focus_next();
				false
			}
			KeyCode::Up | KeyCode::BackTab => {
				panel.focus_previous();
				false
			}
			KeyCode::Left => panel.cycle(filters, false),
			KeyCode::Right => panel.cycle(filters, true),
			KeyCode::Backspace => panel.backspace(filters),
			KeyCode::Delete => panel.clear_focused(filters),
			KeyCode::Char(ch) => panel.type_char(filters, ch),
			_ => false,
		};
		if changed {
			tab.view.reset_page();
			self.refresh();
		}
	}

	fn handle_share_key(&mut self, key: KeyEvent) {
		let Overlay::Share(request) = &mut self.overlay else {
			return;
		};
		match key.code {
			KeyCode::Esc => self.overlay = Overlay::None,
			KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => request.select_next(),
			KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => request.select_previous(),
			KeyCode::Enter => {
				let notification = request.confirm();
				self.overlay = Overlay::None;
				if let Some(notification) = notification {
					info!(notice = %notification.message, "record shared");
					self.notify(notification);
				}
			}
			_ => {}
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(tab) = self.active_tab_mut()
			&& let Some(selected) = tab.table_state.selected()
			&& selected > 0
		{
			tab.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let rows = self.current_page().map_or(0, |page| page.rows.len());
		if let Some(tab) = self.active_tab_mut()
			&& let Some(selected) = tab.table_state.selected()
			&& selected + 1 < rows
		{
			tab.table_state.select(Some(selected + 1));
		}
	}

	fn next_page(&mut self) {
		let Some(filtered) = self
			.active_screen()
			.zip(self.active_tab())
			.map(|(screen, tab)| screen.filtered_count(&tab.view))
		else {
			return;
		};
		if let Some(tab) = self.active_tab_mut()
			&& tab.view.next_page(filtered)
		{
			tab.table_state.select(Some(0));
		}
		self.refresh();
	}

	fn previous_page(&mut self) {
		if let Some(tab) = self.active_tab_mut()
			&& tab.view.previous_page()
		{
			tab.table_state.select(Some(0));
		}
		self.refresh();
	}

	fn row_action(&mut self, action: RowAction) {
		let Some(id) = self.selected_id() else {
			return;
		};
		let Some(screen) = self.screens.at_mut(self.active) else {
			return;
		};
		let noun = screen.descriptor().ui.noun;
		let schema = screen.schema();
		match screen.dispatch(action, id) {
			Ok(ScreenAction::OpenForm(session)) => {
				self.overlay = Overlay::Form(FormView::new(session, schema, noun));
			}
			Ok(ScreenAction::Deleted { label, .. }) => {
				self.notify(Notification::success(format!("Deleted {noun} \"{label}\"")));
				self.refresh();
			}
			Ok(ScreenAction::Share(request)) => self.overlay = Overlay::Share(request),
			Err(error) => {
				debug!(%error, "row action failed");
				self.notify(Notification::warning(error.to_string()));
				self.refresh();
			}
		}
	}

	fn open_create_form(&mut self) {
		let Some(screen) = self.active_screen() else {
			return;
		};
		let form = FormView::new(screen.new_form(), screen.schema(), screen.descriptor().ui.noun);
		self.overlay = Overlay::Form(form);
	}

	fn submit_form(&mut self) {
		let Overlay::Form(form) = &mut self.overlay else {
			return;
		};
		let Some(screen) = self.screens.at_mut(self.active) else {
			return;
		};
		let noun = screen.descriptor().ui.noun;
		let now = Local::now().naive_local();
		let notification = match screen.submit(&mut form.session, now) {
			Ok(SubmitOutcome::Created(id)) => {
				let label = screen.record_label(id).unwrap_or_else(|| id.to_string());
				Some(Notification::success(format!("Added {noun} \"{label}\"")))
			}
			Ok(SubmitOutcome::Updated(id)) => {
				let label = screen.record_label(id).unwrap_or_else(|| id.to_string());
				Some(Notification::success(format!("Saved {noun} \"{label}\"")))
			}
			Ok(SubmitOutcome::Rejected(_)) => return,
			Ok(SubmitOutcome::ReadOnly) => None,
			Err(error) => Some(Notification::warning(error.to_string())),
		};
		self.overlay = Overlay::None;
		if let Some(notification) = notification {
			self.notify(notification);
		}
		self.refresh();
	}

	fn open_filter_panel(&mut self) {
		if let Some(screen) = self.active_screen() {
			self.overlay = Overlay::Filters(FilterPanel::new(screen.schema()));
		}
	}

	fn clear_filters(&mut self) {
		if let Some(tab) = self.active_tab_mut() {
			tab.view.filters.clear();
			tab.view.reset_page();
		}
		self.sync_search_input();
		self.refresh();
	}

	fn cycle_column_sort(&mut self) {
		let Some(schema) = self.active_screen().map(|screen| screen.schema()) else {
			return;
		};
		if let Some(tab) = self.active_tab_mut() {
			tab.view.sort = next_column_sort(schema, &tab.view.sort);
			tab.view.reset_page();
		}
		self.refresh();
	}

	fn cycle_recent_sort(&mut self) {
		let Some(screen) = self.active_screen() else {
			return;
		};
		let schema = screen.schema();
		let tab_label = screen.descriptor().ui.tab_label;
		let Some(tab) = self.tabs.get_mut(self.active) else {
			return;
		};
		match next_recent_sort(schema, &tab.view.sort) {
			Some(sort) => {
				tab.view.sort = sort;
				tab.view.reset_page();
				self.refresh();
			}
			None => self.notify(Notification::info(format!(
				"{tab_label} has no recent sort"
			))),
		}
	}
}

/// Step through each column ascending then descending, then back to unsorted.
pub(crate) fn next_column_sort(schema: &Schema, current: &SortSpec) -> SortSpec {
	let first = || {
		schema.fields.first().map_or(SortSpec::Unsorted, |def| {
			SortSpec::ByFields(vec![SortKey {
				field: def.name,
				direction: SortDirection::Ascending,
			}])
		})
	};
	let SortSpec::ByFields(keys) = current else {
		return first();
	};
	let [key] = keys.as_slice() else {
		return first();
	};
	match key.direction {
		SortDirection::Ascending => SortSpec::ByFields(vec![SortKey {
			field: key.field,
			direction: SortDirection::Descending,
		}]),
		SortDirection::Descending => schema
			.position(key.field)
			.and_then(|index| schema.fields.get(index + 1))
			.map_or(SortSpec::Unsorted, |def| {
				SortSpec::ByFields(vec![SortKey {
					field: def.name,
					direction: SortDirection::Ascending,
				}])
			}),
	}
}

/// Step through the schema's recent flags, then back to unsorted.
///
/// Returns `None` for schemas without recent flags.
pub(crate) fn next_recent_sort(schema: &Schema, current: &SortSpec) -> Option<SortSpec> {
	let first = schema.recent.first()?;
	let next = match current {
		SortSpec::Recent(flags) => {
			let position = schema.recent.iter().position(|key| flags.is_set(key.name));
			match position.and_then(|index| schema.recent.get(index + 1)) {
				Some(key) => key.name,
				None if position.is_some() => return Some(SortSpec::Unsorted),
				None => first.name,
			}
		}
		_ => first.name,
	};
	SortSpec::recent(schema, next).ok()
}
