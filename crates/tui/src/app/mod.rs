mod actions;
mod render;
mod state;

pub use state::{App, PanelOutcome};
