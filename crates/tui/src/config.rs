use crate::announcer::AnnouncementLabels;

/// Human-readable text rendered around the list panel.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title shown in the panel header.
	pub panel_title: String,
	/// Description rendered beneath the title.
	pub panel_description: String,
	/// Accessible label for the search input.
	pub search_label: String,
	/// Placeholder shown while the query is empty.
	pub search_placeholder: String,
	/// Label prefixed to the rendered-item count above the list.
	pub count_label: String,
	/// Message shown when nothing renders.
	pub empty_message: String,
	/// Result-count announcement templates.
	pub announcements: AnnouncementLabels,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			panel_title: "Catalog".to_string(),
			panel_description: "Browse and search the item catalog.".to_string(),
			search_label: "Search for items".to_string(),
			search_placeholder: "Search".to_string(),
			count_label: "Items".to_string(),
			empty_message: "No results".to_string(),
			announcements: AnnouncementLabels::default(),
		}
	}
}

impl UiLabels {
	/// Replace the header title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.panel_title = title.into();
		self
	}

	/// Replace the header description.
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.panel_description = description.into();
		self
	}
}
