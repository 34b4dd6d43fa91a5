//! Reusable widgets for the list panel.

mod input;
mod list;
mod status;

pub use input::render_query_input;
pub use list::{build_rows, render_list};
pub use status::render_status;
