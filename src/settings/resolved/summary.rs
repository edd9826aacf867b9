use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(
		out,
		"  Start screen: {}",
		config.start_screen.as_deref().unwrap_or("(first tab)")
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Page size: {}", config.page_size);
	let _ = writeln!(out, "  Toast duration: {} ms", config.toast_millis);
	let _ = writeln!(out, "  Log level: {}", config.logging.level);
	let _ = writeln!(
		out,
		"  Log directory: {}",
		config.logging.directory.display()
	);
	out
}
