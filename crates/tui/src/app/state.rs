//! Core state container for the list panel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use catalist_catalog_api::{
	CatalogItem, FacetProbe, FilterCache, ItemId, MatchPredicate, RenderPlan, SortCache,
	plan_rendering,
};
use ratatui::widgets::ListState;

use crate::announcer::{BufferedLiveRegion, ResultAnnouncer};
use crate::config::UiLabels;
use crate::input::QueryInput;

/// How the user left the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
	/// A rendered item was chosen; the host routes to its detail screen.
	Open {
		/// Identifier of the chosen item.
		id: ItemId,
	},
	/// The panel was dismissed without a choice.
	Cancelled,
}

/// Aggregate state shared across the panel UI.
///
/// Owns the catalog snapshot, the memoized sort/filter pipeline, the current
/// render plan, and the announcer. One call to [`App::refresh`] runs
/// sorter, filter, and visibility reducer synchronously and in that order,
/// so the count handed to the announcer is always consistent with the
/// visible set that produced it.
pub struct App {
	pub(crate) labels: UiLabels,
	pub(crate) search_input: QueryInput,
	pub(crate) list_state: ListState,
	pub(crate) plan: RenderPlan,
	pub(crate) announcer: ResultAnnouncer,
	pub(crate) live_region: BufferedLiveRegion,
	catalog: Arc<[CatalogItem]>,
	primary_namespace: String,
	probes: Vec<Box<dyn FacetProbe>>,
	sort_cache: SortCache,
	filter_cache: FilterCache,
}

impl App {
	/// Assemble an app; hosts normally go through [`Panel`](crate::Panel).
	#[must_use]
	pub fn new(
		catalog: Arc<[CatalogItem]>,
		matcher: Arc<dyn MatchPredicate>,
		probes: Vec<Box<dyn FacetProbe>>,
		labels: UiLabels,
		primary_namespace: impl Into<String>,
		quiet_period: Duration,
		initial_query: impl Into<String>,
	) -> Self {
		let announcer = ResultAnnouncer::new(labels.announcements.clone(), quiet_period);
		let mut app = Self {
			labels,
			search_input: QueryInput::new(initial_query),
			list_state: ListState::default(),
			plan: RenderPlan::empty(),
			announcer,
			live_region: BufferedLiveRegion::new(),
			catalog,
			primary_namespace: primary_namespace.into(),
			probes,
			sort_cache: SortCache::new(),
			filter_cache: FilterCache::new(matcher),
		};
		app.refresh(Instant::now());
		app
	}

	/// Re-run the list pipeline for the current catalog snapshot and query.
	pub fn refresh(&mut self, now: Instant) {
		let primary_namespace = self.primary_namespace.clone();
		let sorted = self
			.sort_cache
			.get_or_sort(&self.catalog, |item| item.id.namespace() == primary_namespace);
		let visible = self.filter_cache.get_or_filter(&sorted, self.search_input.text());
		self.plan = plan_rendering(&visible, &self.probes);
		self.ensure_selection();
		self.announcer
			.observe(!self.search_input.is_empty(), self.plan.rendered_count(), now);
	}

	/// Flush any announcement whose quiet period has elapsed.
	pub fn pump_announcements(&mut self, now: Instant) {
		self.announcer.poll(now, &mut self.live_region);
	}

	/// Cancel pending announcements; nothing fires after teardown begins.
	pub fn teardown(&mut self) {
		self.announcer.cancel();
	}

	/// Number of rows the list will actually show.
	#[must_use]
	pub fn rendered_count(&self) -> usize {
		self.plan.rendered_count()
	}

	/// The item under the selection cursor, if any row is rendered.
	#[must_use]
	pub fn selected_item(&self) -> Option<&CatalogItem> {
		let selected = self.list_state.selected()?;
		self.plan.rendered_item(selected)
	}

	/// Messages announced to the live region so far, oldest first.
	#[must_use]
	pub fn announcements(&self) -> &[String] {
		self.live_region.messages()
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected() {
			if selected + 1 < self.rendered_count() {
				self.list_state.select(Some(selected + 1));
			}
		}
	}

	/// Keep the selection inside the currently rendered rows.
	fn ensure_selection(&mut self) {
		let rendered = self.rendered_count();
		if rendered == 0 {
			self.list_state.select(None);
		} else {
			match self.list_state.selected() {
				None => self.list_state.select(Some(0)),
				Some(selected) if selected >= rendered => {
					self.list_state.select(Some(rendered - 1));
				}
				Some(_) => {}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use catalist_catalog_api::{FacetDisplayProbe, KeywordMatcher};
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;

	fn item(id: &str, title: &str, facets: &[&str]) -> CatalogItem {
		CatalogItem::new(id, title)
			.expect("valid item")
			.with_facets(facets.iter().copied())
	}

	fn sample_app() -> App {
		let catalog: Arc<[CatalogItem]> = vec![
			item("vendor/gallery", "Gallery", &["color"]),
			item("core/heading", "Heading", &["typography"]),
			item("core/shortcode", "Shortcode", &[]),
			item("core/paragraph", "Paragraph", &["typography", "color"]),
		]
		.into();
		App::new(
			catalog,
			Arc::new(KeywordMatcher),
			vec![Box::new(FacetDisplayProbe::default())],
			UiLabels::default(),
			"core",
			Duration::from_millis(500),
			"",
		)
	}

	fn type_query(app: &mut App, query: &str, now: Instant) {
		for ch in query.chars() {
			app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE), now);
		}
	}

	#[test]
	fn initial_plan_prioritizes_core_items_and_skips_facetless_rows() {
		let app = sample_app();

		let rendered: Vec<&str> = app.plan.rendered_items().map(|i| i.id.as_str()).collect();
		assert_eq!(
			rendered,
			["core/heading", "core/paragraph", "vendor/gallery"],
			"core items come first and the facetless shortcode renders nothing"
		);
		assert_eq!(app.rendered_count(), 3);
		assert_eq!(app.list_state.selected(), Some(0));
	}

	#[test]
	fn typing_filters_and_schedules_one_coalesced_announcement() {
		let mut app = sample_app();
		let start = Instant::now();

		type_query(&mut app, "para", start);
		assert_eq!(app.rendered_count(), 1);

		// The count never changed after the first keystroke, so the
		// deadline armed there is the one that fires.
		app.pump_announcements(start + Duration::from_millis(499));
		assert!(app.announcements().is_empty());
		app.pump_announcements(start + Duration::from_millis(500));
		assert_eq!(app.announcements(), ["1 result found.".to_string()]);
	}

	#[test]
	fn clearing_the_query_before_expiry_announces_nothing() {
		let mut app = sample_app();
		let start = Instant::now();

		type_query(&mut app, "x", start);
		app.handle_key(
			KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
			start + Duration::from_millis(100),
		);

		app.pump_announcements(start + Duration::from_secs(5));
		assert!(app.announcements().is_empty());
	}

	#[test]
	fn selection_follows_rendered_rows_not_visible_items() {
		let mut app = sample_app();
		let start = Instant::now();

		// "s" matches Shortcode too, but that row is suppressed.
		type_query(&mut app, "short", start);
		assert_eq!(app.rendered_count(), 0);
		assert_eq!(app.list_state.selected(), None);
		assert!(app.selected_item().is_none());
	}

	#[test]
	fn enter_opens_the_selected_item() {
		let mut app = sample_app();
		let start = Instant::now();

		app.move_selection_down();
		let outcome = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), start);
		assert_eq!(
			outcome,
			Some(PanelOutcome::Open {
				id: ItemId::new("core/paragraph").expect("valid id"),
			})
		);
	}

	#[test]
	fn escape_cancels() {
		let mut app = sample_app();
		let outcome = app.handle_key(
			KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
			Instant::now(),
		);
		assert_eq!(outcome, Some(PanelOutcome::Cancelled));
	}

	#[test]
	fn teardown_suppresses_a_ripe_announcement() {
		let mut app = sample_app();
		let start = Instant::now();

		type_query(&mut app, "head", start);
		app.teardown();
		app.pump_announcements(start + Duration::from_secs(5));
		assert!(app.announcements().is_empty());
	}

	#[test]
	fn empty_catalog_is_not_an_error() {
		let mut app = App::new(
			Vec::new().into(),
			Arc::new(KeywordMatcher),
			vec![Box::new(FacetDisplayProbe::default())],
			UiLabels::default(),
			"core",
			Duration::from_millis(500),
			"",
		);
		assert_eq!(app.rendered_count(), 0);

		let start = Instant::now();
		type_query(&mut app, "a", start);
		app.pump_announcements(start + Duration::from_millis(500));
		assert_eq!(app.announcements(), ["0 results found.".to_string()]);
	}
}
