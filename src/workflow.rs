//! Build and run the catalog panel from resolved settings.

use anyhow::{Context, Result};
use catalist_catalog_api::{FacetDisplayProbe, FacetProbe, StaticCatalog};
use catalist_tui::{Panel, PanelOutcome, UiLabels};
use tracing::debug;

use crate::catalog;
use crate::settings::ResolvedSettings;

/// End-to-end panel invocation: catalog source in, outcome out.
pub(crate) struct PanelWorkflow {
	panel: Panel,
}

impl PanelWorkflow {
	/// Wire the configured catalog, predicates, and labels into a panel.
	pub(crate) fn from_settings(settings: ResolvedSettings) -> Result<Self> {
		let items = match settings.catalog.as_deref() {
			Some(path) => catalog::load_catalog(path)?,
			None => catalog::sample_catalog(),
		};
		debug!(count = items.len(), "building panel");

		let provider = StaticCatalog::new(items);

		let mut labels = UiLabels::default();
		if let Some(title) = settings.panel_title {
			labels.panel_title = title;
		}
		if let Some(description) = settings.panel_description {
			labels.panel_description = description;
		}

		let probes: Vec<Box<dyn FacetProbe>> =
			vec![Box::new(FacetDisplayProbe::displaying(settings.display_facets))];

		let panel = Panel::from_provider(&provider)
			.context("fetching catalog snapshot")?
			.with_probes(probes)
			.with_labels(labels)
			.with_primary_namespace(settings.primary_namespace)
			.with_quiet_period(settings.quiet_period)
			.with_initial_query(settings.initial_query);

		Ok(Self { panel })
	}

	/// Run the panel to completion on the terminal.
	pub(crate) fn run(self) -> Result<PanelOutcome> {
		self.panel.run()
	}
}
