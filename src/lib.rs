//! Library half of the `tabula` binary.
//!
//! The interactive console lives in `tabula-tui` and the record pipeline in
//! `tabula-record-api`; this crate wires the bundled screens together and
//! provides the pieces the binary shares with tests: directory resolution,
//! file logging and headless page export.

pub mod app_dirs;
pub mod catalog;
pub mod export;
pub mod logging;

pub use export::{ExportError, ExportRequest, ExportedPage, export_page};
pub use tabula_tui::{Console, ConsoleOutcome};
