pub(crate) mod layout;

use layout::resolve_column_widths;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use tabula_record_api::{ProjectedPage, Screen};

use super::App;
use super::state::{Overlay, TabState};
use crate::components::rows::column_constraints;
use crate::components::{
	FooterContext, InputContext, TabItem, TableSpec, build_record_rows, render_filter_panel,
	render_footer, render_form, render_input, render_share_picker, render_table, render_tabs,
	render_toast,
};

const TABLE_HINTS: &[(&str, &str)] = &[
	("/", "search"),
	("a", "add"),
	("v", "view"),
	("e", "edit"),
	("d", "delete"),
	("s", "share"),
	("f", "filter"),
	("o", "sort"),
	("r", "recent"),
	("Esc", "quit"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[("Enter", "done"), ("Esc", "back to table")];

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [tabs_area, input_area, table_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_tab_bar(frame, tabs_area);

		let Some(screen) = self.screens.at(self.active) else {
			return;
		};
		let Some(tab) = self.tabs.get_mut(self.active) else {
			return;
		};
		let page = screen.project(&tab.view);

		let status = view_status(screen, tab);
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				prompt: &self.ui.search_prompt,
				status: &status,
				area: input_area,
				theme: &self.style.theme,
			},
		);

		let empty_message = if tab.view.filters.is_identity() {
			&self.ui.empty_message
		} else {
			&self.ui.no_match_message
		};
		render_results(
			frame,
			table_area,
			screen,
			tab,
			&page,
			empty_message,
			&self.style.theme,
		);

		let hints = if self.search_input.is_focused() {
			SEARCH_HINTS
		} else {
			TABLE_HINTS
		};
		render_footer(
			frame,
			FooterContext {
				info: &page.info,
				hints,
				area: footer_area,
				theme: &self.style.theme,
			},
		);

		let theme = &self.style.theme;
		match &self.overlay {
			Overlay::None => {}
			Overlay::Form(form) => render_form(frame, area, form, theme),
			Overlay::Filters(panel) => {
				render_filter_panel(frame, area, panel, &tab.view.filters, theme);
			}
			Overlay::Share(request) => render_share_picker(frame, area, request, theme),
		}

		if let Some(notification) = self.toast.current() {
			let above_footer = Rect {
				height: area.height.saturating_sub(1),
				..area
			};
			render_toast(frame, above_footer, notification, theme);
		}
	}

	fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
		let tabs: Vec<TabItem<'_>> = self
			.screens
			.iter()
			.map(|screen| TabItem {
				label: screen.descriptor().ui.tab_label,
				count: screen.total_count(),
			})
			.collect();
		render_tabs(frame, area, &tabs, self.active, &self.style.theme);
	}
}

fn render_results(
	frame: &mut Frame,
	area: Rect,
	screen: &dyn Screen,
	tab: &mut TabState,
	page: &ProjectedPage,
	empty_message: &str,
	theme: &crate::style::Theme,
) {
	let schema = screen.schema();
	let ui = &screen.descriptor().ui;
	let widths = column_constraints(schema);
	let column_widths = resolve_column_widths(area, &widths);
	let title = format!(
		" {} · {} of {} {} ",
		ui.title,
		page.info.total_items,
		screen.total_count(),
		ui.count_label
	);

	let spec = TableSpec {
		headers: schema.headers().into_iter().map(String::from).collect(),
		widths,
		rows: build_record_rows(&page.rows, Some(&column_widths)),
		title: Some(title),
		empty_message,
	};
	render_table(frame, area, &mut tab.table_state, spec, theme);
}

/// Active sort and filter count, shown to the right of the search input.
fn view_status(screen: &dyn Screen, tab: &TabState) -> String {
	let mut parts = Vec::new();
	if !tab.view.sort.is_unsorted() {
		parts.push(tab.view.sort.describe(screen.schema()));
	}
	match tab.view.filters.active().count() {
		0 => {}
		1 => parts.push("1 filter".to_string()),
		count => parts.push(format!("{count} filters")),
	}
	parts.join(" · ")
}
