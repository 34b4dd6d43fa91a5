//! Tracing setup for the binary.
//!
//! Log lines go to a file under the cache directory so the alternate-screen
//! TUI is never corrupted by writes to stderr. `CATALIST_LOG` takes the usual
//! `tracing_subscriber` filter syntax.

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const FILTER_ENV: &str = "CATALIST_LOG";
const LOG_FILE: &str = "catalist.log";

/// Install the global subscriber writing to `catalist.log`.
pub(crate) fn initialize() -> Result<()> {
	let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

	let cache_dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&cache_dir)
		.with_context(|| format!("creating cache directory {}", cache_dir.display()))?;
	let log_path = cache_dir.join(LOG_FILE);
	let log_file = fs::File::create(&log_path)
		.with_context(|| format!("creating log file {}", log_path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(log_file)
		.with_ansi(false)
		.init();

	Ok(())
}
