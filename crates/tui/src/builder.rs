use std::sync::Arc;
use std::time::Duration;

use catalist_catalog_api::{
	CatalogError, CatalogItem, CatalogProvider, FacetDisplayProbe, FacetProbe, KeywordMatcher,
	MatchPredicate, PRIMARY_NAMESPACE,
};

use crate::announcer::DEFAULT_QUIET_PERIOD;
use crate::app::{App, PanelOutcome};
use crate::config::UiLabels;

/// Builder wiring a catalog snapshot and its predicates into a runnable panel.
///
/// Everything the pipeline consumes is injected here; nothing is read from
/// ambient state.
pub struct Panel {
	catalog: Arc<[CatalogItem]>,
	matcher: Arc<dyn MatchPredicate>,
	probes: Vec<Box<dyn FacetProbe>>,
	labels: UiLabels,
	primary_namespace: String,
	quiet_period: Duration,
	initial_query: String,
}

impl Panel {
	/// Start from a provider snapshot.
	pub fn from_provider(provider: &dyn CatalogProvider) -> Result<Self, CatalogError> {
		Ok(Self::from_catalog(provider.catalog()?))
	}

	/// Start from an in-memory item list.
	#[must_use]
	pub fn from_items(items: Vec<CatalogItem>) -> Self {
		Self::from_catalog(items.into())
	}

	fn from_catalog(catalog: Arc<[CatalogItem]>) -> Self {
		Self {
			catalog,
			matcher: Arc::new(KeywordMatcher),
			probes: vec![Box::new(FacetDisplayProbe::default())],
			labels: UiLabels::default(),
			primary_namespace: PRIMARY_NAMESPACE.to_string(),
			quiet_period: DEFAULT_QUIET_PERIOD,
			initial_query: String::new(),
		}
	}

	/// Replace the free-text match predicate.
	#[must_use]
	pub fn with_matcher(mut self, matcher: Arc<dyn MatchPredicate>) -> Self {
		self.matcher = matcher;
		self
	}

	/// Replace the content probes deciding which visible items render.
	#[must_use]
	pub fn with_probes(mut self, probes: Vec<Box<dyn FacetProbe>>) -> Self {
		self.probes = probes;
		self
	}

	/// Register an additional content probe.
	#[must_use]
	pub fn add_probe(mut self, probe: Box<dyn FacetProbe>) -> Self {
		self.probes.push(probe);
		self
	}

	/// Replace the panel text, including announcement templates.
	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Override the namespace whose items sort first.
	#[must_use]
	pub fn with_primary_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.primary_namespace = namespace.into();
		self
	}

	/// Override the announcement quiet period.
	#[must_use]
	pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
		self.quiet_period = quiet_period;
		self
	}

	/// Pre-fill the search input.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Assemble the application state without running it.
	#[must_use]
	pub fn build(self) -> App {
		App::new(
			self.catalog,
			self.matcher,
			self.probes,
			self.labels,
			self.primary_namespace,
			self.quiet_period,
			self.initial_query,
		)
	}

	/// Build the app and run it on the terminal until the user exits.
	pub fn run(self) -> anyhow::Result<PanelOutcome> {
		crate::runtime::run(self.build())
	}
}
