//! Debounced result-count announcements for assistive technology.
//!
//! A live region speaks every message written to it, so announcing on each
//! keystroke would backlog a screen reader with stale counts. The announcer
//! coalesces bursts of count changes and emits a single message once the
//! query has been quiet for the configured period.

use std::time::{Duration, Instant};

use tracing::debug;

/// Quiet period applied when the host does not configure its own.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Assistive-technology announcement channel.
///
/// Owned exclusively by the announcer's poll path; no other component writes
/// to it.
pub trait LiveRegion {
	/// Speak `message` without requiring focus.
	fn announce(&mut self, message: &str);
}

/// Live region that retains its messages, newest last.
///
/// The panel renders the last message in its status line as the terminal
/// stand-in for an ARIA status region; tests inspect the full history.
#[derive(Debug, Default)]
pub struct BufferedLiveRegion {
	messages: Vec<String>,
}

impl BufferedLiveRegion {
	/// Create an empty region.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// The most recent announcement, if any.
	#[must_use]
	pub fn last(&self) -> Option<&str> {
		self.messages.last().map(String::as_str)
	}

	/// Every announcement made so far, oldest first.
	#[must_use]
	pub fn messages(&self) -> &[String] {
		&self.messages
	}
}

impl LiveRegion for BufferedLiveRegion {
	fn announce(&mut self, message: &str) {
		self.messages.push(message.to_string());
	}
}

/// Substitute `count` into the grammatically matching template.
///
/// Templates carry a `%d` placeholder, e.g. `"%d result found."` /
/// `"%d results found."`; the singular form applies only to a count of one.
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
	let template = if count == 1 { singular } else { plural };
	template.replace("%d", &count.to_string())
}

/// Announcement message templates, substitutable for localization.
#[derive(Debug, Clone)]
pub struct AnnouncementLabels {
	/// Template used when exactly one item rendered.
	pub one_result: String,
	/// Template used for zero or several rendered items.
	pub many_results: String,
}

impl Default for AnnouncementLabels {
	fn default() -> Self {
		Self {
			one_result: "%d result found.".to_string(),
			many_results: "%d results found.".to_string(),
		}
	}
}

impl AnnouncementLabels {
	/// Render the announcement for `count` rendered items.
	#[must_use]
	pub fn message(&self, count: usize) -> String {
		pluralize(count, &self.one_result, &self.many_results)
	}
}

#[derive(Debug)]
struct Pending {
	deadline: Instant,
	count: usize,
}

/// Two-state debounce machine: idle, or holding one armed deadline.
///
/// [`observe`] records rendered-count changes and (re)arms the deadline;
/// [`poll`] emits at most one announcement once the deadline passes.
/// Announcements only ever happen inside `poll`, so dropping the announcer or
/// calling [`cancel`] guarantees that nothing fires afterwards, even if the
/// deadline has already elapsed.
///
/// [`observe`]: ResultAnnouncer::observe
/// [`poll`]: ResultAnnouncer::poll
/// [`cancel`]: ResultAnnouncer::cancel
#[derive(Debug)]
pub struct ResultAnnouncer {
	labels: AnnouncementLabels,
	quiet_period: Duration,
	pending: Option<Pending>,
	last_observed: Option<usize>,
}

impl ResultAnnouncer {
	/// Create an announcer with the provided phrasing and quiet period.
	#[must_use]
	pub fn new(labels: AnnouncementLabels, quiet_period: Duration) -> Self {
		Self {
			labels,
			quiet_period,
			pending: None,
			last_observed: None,
		}
	}

	/// Record the rendered count produced by the current update cycle.
	///
	/// With an active (non-empty) query, any change in the count arms the
	/// deadline at `now + quiet_period`, replacing a previously armed one so
	/// only the most recent value survives a burst. With an inactive query,
	/// all pending state is discarded; a count left over from a prior query
	/// is never announced.
	pub fn observe(&mut self, query_active: bool, rendered_count: usize, now: Instant) {
		if !query_active {
			self.pending = None;
			self.last_observed = None;
			return;
		}

		if self.last_observed != Some(rendered_count) {
			self.last_observed = Some(rendered_count);
			self.pending = Some(Pending {
				deadline: now + self.quiet_period,
				count: rendered_count,
			});
		}
	}

	/// Emit the pending announcement if its quiet period has elapsed.
	///
	/// Returns `true` when a message was written to `region`.
	pub fn poll(&mut self, now: Instant, region: &mut dyn LiveRegion) -> bool {
		let expired = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !expired {
			return false;
		}

		// take() moves us back to idle before announcing
		if let Some(pending) = self.pending.take() {
			let message = self.labels.message(pending.count);
			debug!(count = pending.count, "announcing result count");
			region.announce(&message);
			return true;
		}
		false
	}

	/// Drop any pending announcement without emitting it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Whether a deadline is currently armed.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

impl Default for ResultAnnouncer {
	fn default() -> Self {
		Self::new(AnnouncementLabels::default(), DEFAULT_QUIET_PERIOD)
	}
}
