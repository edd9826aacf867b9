use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tabula_record_api::ScreenRegistry;

use crate::{App, ConsoleOptions};

fn fieldsense_app() -> App<'static> {
	app_over(tabula_screens_fieldsense::screens())
}

fn documents_app() -> App<'static> {
	app_over(tabula_screens_documents::screens())
}

fn app_over(screens: Vec<Box<dyn tabula_record_api::Screen>>) -> App<'static> {
	let mut registry = ScreenRegistry::new();
	registry.register_all(screens).expect("unique screen ids");
	App::new(registry, ConsoleOptions::default())
}

fn press(app: &mut App<'_>, code: KeyCode) {
	let outcome = app
		.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled");
	assert!(outcome.is_none(), "{code:?} should not quit");
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn render(app: &mut App<'_>) -> String {
	let backend = TestBackend::new(120, 24);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn tab_bar_lists_screens_with_counts() {
	let mut app = fieldsense_app();
	let screen = render(&mut app);
	let tab_bar = screen.lines().next().unwrap_or_default().trim();
	insta::assert_snapshot!(tab_bar, @"Clients (5)  Leave (6)  Visits (5)  Users (5)");
}

#[test]
fn initial_frame_shows_first_page() {
	let mut app = fieldsense_app();
	let screen = render(&mut app);
	assert!(screen.contains("Client directory · 5 of 5 clients"));
	assert!(screen.contains("Tech Solutions Inc"));
	assert!(screen.contains("Urban Retail Co"));
	assert!(screen.contains("Page 1 of 1 · 5 items"));
	assert!(screen.contains("Search > "));
}

#[test]
fn industry_filter_keeps_matching_clients() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('f'));
	for _ in 0..4 {
		press(&mut app, KeyCode::Down);
	}
	press(&mut app, KeyCode::Right);
	let panel = render(&mut app);
	assert!(panel.contains("IT"));

	press(&mut app, KeyCode::Esc);
	let screen = render(&mut app);
	assert!(screen.contains("Tech Solutions Inc"));
	assert!(!screen.contains("Green Valley"));
	assert!(screen.contains("1 of 5 clients"));
	assert!(screen.contains("1 filter"));

	press(&mut app, KeyCode::Char('c'));
	let screen = render(&mut app);
	assert!(screen.contains("Green Valley"));
}

#[test]
fn search_narrows_rows_and_survives_tab_switches() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "fin");
	press(&mut app, KeyCode::Enter);
	let screen = render(&mut app);
	assert!(screen.contains("Summit Finance Group"));
	assert!(!screen.contains("Tech Solutions Inc"));
	assert!(screen.contains("Page 1 of 1 · 1 item"));

	press(&mut app, KeyCode::Tab);
	assert_eq!(app.active_screen_id(), Some("leave"));
	assert_eq!(app.search_input.text(), "");

	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.active_screen_id(), Some("clients"));
	assert_eq!(app.search_input.text(), "fin");
}

#[test]
fn unmatched_search_shows_no_match_message() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "zzz");
	let screen = render(&mut app);
	assert!(screen.contains("No matching records"));
	assert!(screen.contains("Page 1 of 1 · 0 items"));
}

#[test]
fn create_form_reports_missing_required_fields() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('a'));
	press(&mut app, KeyCode::Enter);
	let screen = render(&mut app);
	assert!(screen.contains("New client"));
	assert!(screen.contains("Client name is required"));
	assert!(screen.contains("Status is required"));
	assert_eq!(app.outcome().screens[0].records, 5);

	press(&mut app, KeyCode::Esc);
	let screen = render(&mut app);
	assert!(!screen.contains("Client name is required"));
}

#[test]
fn view_form_is_read_only() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Enter);
	let screen = render(&mut app);
	assert!(screen.contains("View client"));
	assert!(screen.contains("Esc close"));

	type_text(&mut app, "zz");
	let screen = render(&mut app);
	assert!(!screen.contains("Tech Solutions Inczz"));

	press(&mut app, KeyCode::Enter);
	assert!(!render(&mut app).contains("View client"));
}

#[test]
fn edit_form_saves_changes() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('e'));
	type_text(&mut app, " Ltd");
	press(&mut app, KeyCode::Enter);
	assert_eq!(
		app.toast_message(),
		Some("Saved client \"Tech Solutions Inc Ltd\"")
	);
	let screen = render(&mut app);
	assert!(screen.contains("Tech Solutions Inc Ltd"));
	assert_eq!(app.outcome().screens[0].records, 5);
}

#[test]
fn delete_updates_counts_and_toasts() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('d'));
	assert_eq!(
		app.toast_message(),
		Some("Deleted client \"Tech Solutions Inc\"")
	);
	let screen = render(&mut app);
	assert!(screen.contains("Clients (4)"));
	assert!(screen.contains("4 of 4 clients"));
	assert!(screen.contains("Deleted client"));

	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.toast_message(), None);
	assert!(!render(&mut app).contains("Tech Solutions Inc"));
}

#[test]
fn share_picker_confirms_recipient() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('s'));
	let screen = render(&mut app);
	assert!(screen.contains("Share \"Tech Solutions Inc\""));
	assert!(screen.contains("Rahul Mehta"));

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);
	assert_eq!(
		app.toast_message(),
		Some("Shared \"Tech Solutions Inc\" with Sneha Iyer")
	);
}

#[test]
fn screens_without_recent_flags_say_so() {
	let mut app = fieldsense_app();
	press(&mut app, KeyCode::Char('r'));
	assert_eq!(app.toast_message(), Some("Clients has no recent sort"));
}

#[test]
fn paging_walks_through_files() {
	let mut app = documents_app();
	let screen = render(&mut app);
	assert!(screen.contains("Page 1 of 2 · 7 items"));
	assert!(screen.contains("Annual Report 2024.pdf"));

	press(&mut app, KeyCode::Right);
	let screen = render(&mut app);
	assert!(screen.contains("Page 2 of 2 · 7 items"));
	assert!(screen.contains("Release Notes.txt"));
	assert!(!screen.contains("Annual Report 2024.pdf"));

	press(&mut app, KeyCode::Right);
	assert!(render(&mut app).contains("Page 2 of 2"));
	press(&mut app, KeyCode::Left);
	assert!(render(&mut app).contains("Page 1 of 2"));
}

#[test]
fn folder_form_rejects_silently() {
	let mut app = documents_app();
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.active_screen_id(), Some("folders"));
	press(&mut app, KeyCode::Char('a'));
	press(&mut app, KeyCode::Enter);
	let screen = render(&mut app);
	assert!(screen.contains("New folder"));
	assert!(!screen.contains("is required"));
	assert_eq!(app.toast_message(), None);
	assert_eq!(app.outcome().screens[1].records, 3);

	type_text(&mut app, "Archive");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.toast_message(), Some("Added folder \"Archive\""));
	assert_eq!(app.outcome().screens[1].records, 4);
}

#[test]
fn escape_quits_with_counts() {
	let mut app = fieldsense_app();
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
		.expect("key handled")
		.expect("escape quits");
	let counts: Vec<_> = outcome
		.screens
		.iter()
		.map(|screen| (screen.id, screen.records))
		.collect();
	assert_eq!(
		counts,
		vec![("clients", 5), ("leave", 6), ("visits", 5), ("users", 5)]
	);
}
