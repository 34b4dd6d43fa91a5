use anyhow::Result;
use catalist_tui::PanelOutcome;
use serde_json::json;

/// Print the outcome as a bare identifier; cancellation prints nothing.
pub(crate) fn print_plain(outcome: &PanelOutcome) {
	if let PanelOutcome::Open { id } = outcome {
		println!("{id}");
	}
}

/// Print the outcome as a JSON object.
pub(crate) fn print_json(outcome: &PanelOutcome) -> Result<()> {
	let value = match outcome {
		PanelOutcome::Open { id } => json!({ "action": "open", "id": id.as_str() }),
		PanelOutcome::Cancelled => json!({ "action": "cancelled" }),
	};
	println!("{}", serde_json::to_string(&value)?);
	Ok(())
}
