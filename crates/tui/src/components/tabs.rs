use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::style::Theme;

/// Render metadata for a tab header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
	pub label: &'a str,
	/// Records in the screen before filtering.
	pub count: usize,
}

/// Render the tab bar with the selected tab emphasised.
pub fn render_tabs(frame: &mut Frame, area: Rect, tabs: &[TabItem<'_>], selected: usize, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let selected = selected.min(tabs.len().saturating_sub(1));
	let titles = build_tab_titles(theme, selected, tabs);
	let widget = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, area);
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	tabs.iter()
		.enumerate()
		.map(|(index, tab)| {
			let label = format!(" {} ({}) ", tab.label, tab.count);
			let style = if index == selected { active } else { inactive };
			Line::from(label).style(style)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tabs() -> Vec<TabItem<'static>> {
		vec![
			TabItem {
				label: "Clients",
				count: 5,
			},
			TabItem {
				label: "Leave",
				count: 6,
			},
		]
	}

	#[test]
	fn titles_carry_counts_and_selection_style() {
		let theme = Theme::default();
		let titles = build_tab_titles(&theme, 1, &tabs());
		assert_eq!(titles[0].spans[0].content.as_ref().trim(), "Clients (5)");
		assert_eq!(titles[1].spans[0].content.as_ref().trim(), "Leave (6)");
		assert_eq!(titles[0].style, theme.tab_inactive_style());
		assert_eq!(titles[1].style, theme.header_style());
	}
}
