use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, PanelOutcome};

impl App {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<PanelOutcome> {
		match key.code {
			KeyCode::Esc => Some(PanelOutcome::Cancelled),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				Some(PanelOutcome::Cancelled)
			}
			KeyCode::Enter => self.selected_item().map(|item| PanelOutcome::Open {
				id: item.id.clone(),
			}),
			KeyCode::Up => {
				self.move_selection_up();
				None
			}
			KeyCode::Down => {
				self.move_selection_down();
				None
			}
			_ => {
				if self.search_input.input(key) {
					self.refresh(now);
				}
				None
			}
		}
	}
}
