use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, parse_filter};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabula` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tabula",
    version,
    long_version = long_version(),
    about = "Terminal admin console for documents, FieldSense HR and project records",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TABULA_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 's',
        long = "start-screen",
        value_name = "SCREEN",
        help = "Open this screen first (default: the first tab)"
    )]
    pub(crate) start_screen: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Pre-fill the search on the first screen (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        help = "Rows per table page (default: 5)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long = "toast-millis",
        value_name = "MS",
        help = "How long notifications stay visible (default: 1500)"
    )]
    pub(crate) toast_millis: Option<u64>,
    #[arg(
        long = "log-dir",
        value_name = "PATH",
        help = "Write log files here (default: <data dir>/logs)"
    )]
    pub(crate) log_dir: Option<PathBuf>,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter used when RUST_LOG is unset (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'e',
        long = "export",
        value_name = "SCREEN",
        help = "Print one page of a screen instead of starting the console"
    )]
    pub(crate) export: Option<String>,
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "FIELD=VALUE",
        value_parser = parse_filter,
        action = ArgAction::Append,
        requires = "export",
        help = "Column filter for --export; repeat for several fields"
    )]
    pub(crate) filters: Vec<(String, String)>,
    #[arg(
        long,
        value_name = "SPEC",
        requires = "export",
        help = "Sort for --export: field, field:desc, a comma list, or recent:<flag>"
    )]
    pub(crate) sort: Option<String>,
    #[arg(
        long,
        value_name = "NUM",
        default_value_t = 1,
        requires = "export",
        help = "Page to print with --export"
    )]
    pub(crate) page: usize,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        long = "list-screens",
        help = "List screen ids and exit (default: disabled)"
    )]
    pub(crate) list_screens: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print results"
    )]
    pub(crate) output: OutputFormat,
}
