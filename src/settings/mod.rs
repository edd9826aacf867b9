//! Configuration loading and resolution.
//!
//! `load` layers config files, `TABULA__*` environment variables and CLI flags,
//! then validates the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
