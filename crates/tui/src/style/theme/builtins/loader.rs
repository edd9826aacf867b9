use anyhow::{Context, Result, bail};
use include_dir::Dir;
use serde::Deserialize;

use super::palette::Palette;
use crate::style::theme::types::NamedTheme;

pub(super) struct BuiltinThemes {
	pub(super) themes: Vec<NamedTheme>,
	pub(super) default_index: usize,
}

/// One `themes/*.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	default: bool,
	#[serde(default)]
	palette: Palette,
}

/// Parse every bundled theme file, in file-name order.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let sources = files
		.into_iter()
		.map(|file| {
			let path = file.path().display().to_string();
			let contents = file
				.contents_utf8()
				.with_context(|| format!("{path} is not valid UTF-8"))?;
			Ok((path, contents))
		})
		.collect::<Result<Vec<_>>>()?;
	collect_themes(sources)
}

fn collect_themes<'a>(
	sources: impl IntoIterator<Item = (String, &'a str)>,
) -> Result<BuiltinThemes> {
	let mut themes: Vec<NamedTheme> = Vec::new();
	let mut default_index = None;

	for (path, contents) in sources {
		let file: ThemeFile = toml::from_str(contents)
			.with_context(|| format!("failed to parse built-in theme {path}"))?;
		let name = file.name.trim().to_string();
		if name.is_empty() {
			bail!("built-in theme {path} has an empty name");
		}
		if themes.iter().any(|theme| theme.name.eq_ignore_ascii_case(&name)) {
			bail!("built-in theme `{name}` is defined twice");
		}
		if file.default {
			if let Some(index) = default_index {
				let existing: &NamedTheme = &themes[index];
				bail!(
					"multiple built-in themes are marked as default (`{}` and `{name}`)",
					existing.name
				);
			}
			default_index = Some(themes.len());
		}
		themes.push(NamedTheme {
			name,
			theme: file.palette.theme(),
		});
	}

	if themes.is_empty() {
		bail!("no built-in theme definitions were found");
	}
	Ok(BuiltinThemes {
		themes,
		default_index: default_index.unwrap_or(0),
	})
}
