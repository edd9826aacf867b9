use anyhow::Result;
use tabula::{ConsoleOutcome, ExportedPage};

use super::OutputFormat;

/// Print the per-screen record counts left after a session.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &ConsoleOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
	}
	Ok(())
}

/// Print an exported page.
pub(crate) fn print_export(format: OutputFormat, page: &ExportedPage) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", page.to_plain()),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
	}
	Ok(())
}

fn format_outcome_plain(outcome: &ConsoleOutcome) -> String {
	let width = outcome
		.screens
		.iter()
		.map(|screen| screen.id.len())
		.max()
		.unwrap_or(0);
	outcome
		.screens
		.iter()
		.map(|screen| {
			format!(
				"{:<width$}  {} {}\n",
				screen.id, screen.records, screen.label
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use tabula_tui::ScreenCount;

	use super::*;

	fn outcome() -> ConsoleOutcome {
		ConsoleOutcome {
			screens: vec![
				ScreenCount {
					id: "files",
					label: "files",
					records: 7,
				},
				ScreenCount {
					id: "clients",
					label: "clients",
					records: 4,
				},
			],
		}
	}

	#[test]
	fn plain_summary_aligns_ids() {
		assert_eq!(
			format_outcome_plain(&outcome()),
			"files    7 files\nclients  4 clients\n"
		);
	}

	#[test]
	fn json_summary_lists_every_screen() {
		let json = serde_json::to_string(&outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["screens"][1]["id"], "clients");
		assert_eq!(value["screens"][1]["records"], 4);
	}
}
