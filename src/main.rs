mod app_dirs;
mod catalog;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::PanelWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize()?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_panel(cli.output, resolved)
}

/// Run the panel workflow and print the outcome in the chosen format.
fn run_panel(format: OutputFormat, settings: settings::ResolvedSettings) -> Result<()> {
	let workflow = PanelWorkflow::from_settings(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
