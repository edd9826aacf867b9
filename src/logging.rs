//! File logging for the console.
//!
//! The terminal UI owns stdout, so events go to a daily-rolled file instead.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "tabula.log";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
	pub directory: PathBuf,
	/// Filter directive such as `info` or `tabula_record_api=debug`.
	pub level: String,
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(options: &LoggingOptions) -> Result<WorkerGuard> {
	fs::create_dir_all(&options.directory).with_context(|| {
		format!(
			"failed to create log directory {}",
			options.directory.display()
		)
	})?;

	let filter = env_filter(&options.level)?;
	let appender = tracing_appender::rolling::daily(&options.directory, LOG_FILE_PREFIX);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	let layer = fmt::layer()
		.with_target(true)
		.with_ansi(false)
		.with_writer(writer);

	tracing_subscriber::registry()
		.with(filter)
		.with(layer)
		.try_init()
		.context("logging is already initialised")?;

	tracing::info!(
		log_dir = %options.directory.display(),
		level = %options.level,
		"logging initialised"
	);

	Ok(guard)
}

fn env_filter(level: &str) -> Result<EnvFilter> {
	match EnvFilter::try_from_default_env() {
		Ok(filter) => Ok(filter),
		Err(_) => EnvFilter::try_new(level)
			.with_context(|| format!("invalid log filter `{level}`")),
	}
}
