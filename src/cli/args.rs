use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the chosen outcome is printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Bare item identifier, one line.
	Plain,
	/// Structured JSON object.
	Json,
}

/// Command line arguments for the catalog panel.
#[derive(Debug, Parser)]
#[command(name = "catalist", version, about)]
pub(crate) struct CliArgs {
	/// Path to a JSON catalog file. The builtin sample catalog is used
	/// when neither this flag nor the settings file provides one.
	#[arg(long, env = "CATALIST_CATALOG")]
	pub catalog: Option<PathBuf>,

	/// Pre-fill the search input with this query.
	#[arg(long)]
	pub query: Option<String>,

	/// Namespace whose items sort before all others.
	#[arg(long)]
	pub primary_namespace: Option<String>,

	/// Quiet period in milliseconds before a result count is announced.
	#[arg(long)]
	pub quiet_period_ms: Option<u64>,

	/// Output format for the chosen item.
	#[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
	pub output: OutputFormat,

	/// Print the resolved settings before launching.
	#[arg(long)]
	pub print_config: bool,
}

/// Parse command line arguments into the strongly typed [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
