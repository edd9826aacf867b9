//! Interactive terminal UI for `tabula`.
//!
//! This crate contains the console application: the builder, event loop,
//! rendering pipeline and state management, plus the widgets and themes that
//! draw the tab bar, the record table and its overlays.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, ConsoleOutcome, ScreenCount};
pub use builder::Console;
pub use config::{ConsoleOptions, UiLabels};
pub use runtime::run;

pub use crate::input::SearchInput;
pub use crate::style::{StyleConfig, Theme, default_theme};
