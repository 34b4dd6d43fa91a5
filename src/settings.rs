//! Settings file loading and resolution.
//!
//! A `catalist.toml` in the config directory supplies defaults; command line
//! flags win over the file. The raw deserialized form is validated into
//! [`ResolvedSettings`] before anything else sees it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use catalist_catalog_api::{DEFAULT_DISPLAY_FACETS, PRIMARY_NAMESPACE};
use catalist_tui::DEFAULT_QUIET_PERIOD;
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

const SETTINGS_FILE: &str = "catalist.toml";

/// Settings exactly as written in the file; everything optional.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
	catalog: Option<PathBuf>,
	primary_namespace: Option<String>,
	quiet_period_ms: Option<u64>,
	display_facets: Option<Vec<String>>,
	panel_title: Option<String>,
	panel_description: Option<String>,
}

/// Validated configuration the workflow runs with.
#[derive(Debug)]
pub(crate) struct ResolvedSettings {
	pub catalog: Option<PathBuf>,
	pub primary_namespace: String,
	pub quiet_period: Duration,
	pub display_facets: Vec<String>,
	pub panel_title: Option<String>,
	pub panel_description: Option<String>,
	pub initial_query: String,
}

/// Load the settings file (if any) and merge the command line over it.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
	let path = app_dirs::get_config_dir()?.join(SETTINGS_FILE);
	let raw = read_raw(&path)?;
	resolve(raw, cli)
}

fn read_raw(path: &Path) -> Result<RawSettings> {
	let settings = config::Config::builder()
		.add_source(config::File::from(path.to_path_buf()).required(false))
		.build()
		.with_context(|| format!("reading settings from {}", path.display()))?;
	settings
		.try_deserialize()
		.with_context(|| format!("parsing settings from {}", path.display()))
}

fn resolve(raw: RawSettings, cli: &CliArgs) -> Result<ResolvedSettings> {
	let quiet_period_ms = cli.quiet_period_ms.or(raw.quiet_period_ms);
	if let Some(ms) = quiet_period_ms {
		ensure!(ms > 0, "quiet-period-ms must be greater than zero");
	}
	let quiet_period = quiet_period_ms
		.map(Duration::from_millis)
		.unwrap_or(DEFAULT_QUIET_PERIOD);

	let display_facets = raw.display_facets.unwrap_or_else(|| {
		DEFAULT_DISPLAY_FACETS.iter().map(|facet| facet.to_string()).collect()
	});
	ensure!(
		display_facets.iter().all(|facet| !facet.trim().is_empty()),
		"display_facets entries must not be empty"
	);

	let primary_namespace = cli
		.primary_namespace
		.clone()
		.or(raw.primary_namespace)
		.unwrap_or_else(|| PRIMARY_NAMESPACE.to_string());
	ensure!(
		!primary_namespace.trim().is_empty(),
		"primary namespace must not be empty"
	);

	Ok(ResolvedSettings {
		catalog: cli.catalog.clone().or(raw.catalog),
		primary_namespace,
		quiet_period,
		display_facets,
		panel_title: raw.panel_title,
		panel_description: raw.panel_description,
		initial_query: cli.query.clone().unwrap_or_default(),
	})
}

impl ResolvedSettings {
	/// Print a short human-readable summary of the effective settings.
	pub(crate) fn print_summary(&self) {
		let catalog = self
			.catalog
			.as_ref()
			.map_or_else(|| "builtin sample".to_string(), |path| path.display().to_string());
		println!("catalog: {catalog}");
		println!("primary namespace: {}", self.primary_namespace);
		println!("quiet period: {}ms", self.quiet_period.as_millis());
		println!("display facets: {}", self.display_facets.join(", "));
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut full = vec!["catalist"];
		full.extend_from_slice(args);
		CliArgs::parse_from(full)
	}

	#[test]
	fn missing_file_yields_defaults() {
		let raw = read_raw(Path::new("/nonexistent/catalist.toml")).expect("missing file is fine");
		let resolved = resolve(raw, &cli(&[])).expect("defaults resolve");

		assert_eq!(resolved.primary_namespace, "core");
		assert_eq!(resolved.quiet_period, Duration::from_millis(500));
		assert_eq!(resolved.display_facets.len(), DEFAULT_DISPLAY_FACETS.len());
		assert!(resolved.catalog.is_none());
	}

	#[test]
	fn file_values_are_read_and_cli_wins() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp settings file");
		writeln!(
			file,
			"primary_namespace = \"vendor\"\nquiet_period_ms = 250\ncatalog = \"/tmp/items.json\""
		)
		.expect("write settings");

		let raw = read_raw(file.path()).expect("settings parse");
		let resolved =
			resolve(raw, &cli(&["--primary-namespace", "acme"])).expect("resolution succeeds");

		assert_eq!(resolved.primary_namespace, "acme", "cli overrides the file");
		assert_eq!(resolved.quiet_period, Duration::from_millis(250));
		assert_eq!(resolved.catalog.as_deref(), Some(Path::new("/tmp/items.json")));
	}

	#[test]
	fn zero_quiet_period_is_rejected() {
		let raw = RawSettings {
			quiet_period_ms: Some(0),
			..RawSettings::default()
		};
		let error = resolve(raw, &cli(&[])).expect_err("zero quiet period must fail");
		assert!(error.to_string().contains("quiet-period-ms"));
	}

	#[test]
	fn blank_facets_are_rejected() {
		let raw = RawSettings {
			display_facets: Some(vec!["typography".to_string(), " ".to_string()]),
			..RawSettings::default()
		};
		assert!(resolve(raw, &cli(&[])).is_err());
	}
}
