//! File-backed `tracing` setup.
//!
//! The terminal belongs to the table UI while the program runs, so log lines
//! go to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "PAGETABLE_LOG";
const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "pagetable.log";

/// Where logs go when no explicit file is given.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `log_file` (or the default file).
///
/// Returns the path that receives the logs.
///
/// # Errors
///
/// Fails when the file cannot be created or a subscriber is already set.
pub fn initialize(log_file: Option<&Path>) -> Result<PathBuf> {
	let path = match log_file {
		Some(path) => path.to_path_buf(),
		None => default_log_file()?,
	};
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}
