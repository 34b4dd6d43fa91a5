//! Interactive terminal list panel for `catalist`.
//!
//! This crate contains the searchable catalog panel: the builder, event
//! loop, rendering pipeline, query input, and the debounced result-count
//! announcer that feeds an assistive-technology live region.

mod announcer;
mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;


pub use announcer::{
	AnnouncementLabels, BufferedLiveRegion, DEFAULT_QUIET_PERIOD, LiveRegion, ResultAnnouncer,
	pluralize,
};
pub use app::{App, PanelOutcome};
pub use builder::Panel;
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
