mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_export, print_outcome};
use settings::ResolvedConfig;
use tabula::{ExportRequest, catalog, logging};
use workflow::{ConsoleWorkflow, run_export};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tabula_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.list_screens {
		let screens = catalog::registry()?;
		for descriptor in screens.descriptors() {
			println!(
				"{:<10} {:<11} {}",
				descriptor.id, descriptor.group, descriptor.ui.title
			);
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	let _guard = logging::init(&resolved.logging)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.export.clone() {
		Some(screen) => export(&cli, screen, &resolved),
		None => run_console(cli.output, &resolved),
	}
}

/// Run the interactive console and print the record counts it ends with.
fn run_console(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let workflow = ConsoleWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;
	print_outcome(format, &outcome)
}

fn export(cli: &CliArgs, screen: String, settings: &ResolvedConfig) -> Result<()> {
	let request = ExportRequest {
		screen,
		filters: cli.filters.clone(),
		query: settings.initial_query.clone(),
		sort: cli.sort.clone(),
		page: cli.page,
		page_size: settings.page_size(),
	};
	let page = run_export(&request)?;
	print_export(cli.output, &page)
}
