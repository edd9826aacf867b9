//! Core application state and behaviour for the console.
//!
//! The [`App`] type aggregates the screen registry, per-tab view state and UI
//! affordances. Supporting modules split the implementation into input
//! handling and rendering.

mod actions;
mod render;
mod state;

pub use state::{App, ConsoleOutcome, ScreenCount};
