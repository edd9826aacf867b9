mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{NamedTheme, Theme};

/// Look up a built-in theme by name, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtins::themes()
		.iter()
		.find(|named| named.name.eq_ignore_ascii_case(name))
		.map(|named| named.theme)
}

/// Names of the built-in themes in display order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::themes()
		.iter()
		.map(|named| named.name.clone())
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Modifier;

	use super::*;

	#[test]
	fn bundled_themes_are_listed_and_found_by_name() {
		assert_eq!(names(), vec!["mono", "paper", "slate"]);
		assert_eq!(by_name(" Paper "), by_name("paper"));
		assert!(by_name("paper").is_some());
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn default_theme_is_the_marked_one() {
		assert_eq!(Some(default_theme()), by_name("slate"));
	}

	#[test]
	fn mono_draws_with_modifiers_only() {
		let mono = by_name("mono").expect("mono is bundled");
		assert_eq!(mono.header.fg, None);
		assert!(mono.row_highlight.add_modifier.contains(Modifier::REVERSED));
		assert!(mono.success.add_modifier.contains(Modifier::REVERSED));
	}
}
