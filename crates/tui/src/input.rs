//! Single-line query input state.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable free-text query with a caret.
///
/// The empty string is the distinguished "no filter" value; callers check
/// [`QueryInput::is_empty`] to decide whether announcements apply.
#[derive(Debug, Default)]
pub struct QueryInput {
	text: String,
	caret: usize,
}

impl QueryInput {
	/// Create an input pre-filled with `text`, caret at the end.
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let caret = text.len();
		Self { text, caret }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Whether the query is the distinguished empty value.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Display width of the text left of the caret, for cursor placement.
	#[must_use]
	pub fn caret_column(&self) -> u16 {
		self.text[..self.caret].width() as u16
	}

	/// Apply a key event, returning `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if self.text.is_empty() {
					return false;
				}
				self.clear();
				true
			}
			KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.text.insert(self.caret, ch);
				self.caret += ch.len_utf8();
				true
			}
			KeyCode::Backspace => {
				let Some(removed) = self.prev_boundary() else {
					return false;
				};
				self.text.remove(removed);
				self.caret = removed;
				true
			}
			KeyCode::Delete => {
				if self.caret >= self.text.len() {
					return false;
				}
				self.text.remove(self.caret);
				true
			}
			KeyCode::Left => {
				if let Some(prev) = self.prev_boundary() {
					self.caret = prev;
				}
				false
			}
			KeyCode::Right => {
				if let Some(next) = self.next_boundary() {
					self.caret = next;
				}
				false
			}
			KeyCode::Home => {
				self.caret = 0;
				false
			}
			KeyCode::End => {
				self.caret = self.text.len();
				false
			}
			_ => false,
		}
	}

	/// Reset to the empty query.
	pub fn clear(&mut self) {
		self.text.clear();
		self.caret = 0;
	}

	fn prev_boundary(&self) -> Option<usize> {
		self.text[..self.caret].char_indices().next_back().map(|(idx, _)| idx)
	}

	fn next_boundary(&self) -> Option<usize> {
		self.text[self.caret..]
			.chars()
			.next()
			.map(|ch| self.caret + ch.len_utf8())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	#[test]
	fn typing_appends_at_the_caret() {
		let mut input = QueryInput::default();
		assert!(input.input(key(KeyCode::Char('h'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "hi");
	}

	#[test]
	fn backspace_respects_multibyte_boundaries() {
		let mut input = QueryInput::new("héllo");
		for _ in 0..4 {
			assert!(input.input(key(KeyCode::Backspace)));
		}
		assert_eq!(input.text(), "h");
		assert!(input.input(key(KeyCode::Backspace)));
		assert!(!input.input(key(KeyCode::Backspace)), "empty input has nothing to delete");
	}

	#[test]
	fn caret_movement_does_not_report_changes() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert!(!input.input(key(KeyCode::Home)));
		assert!(input.input(key(KeyCode::Char('x'))));
		assert_eq!(input.text(), "xabc");
	}

	#[test]
	fn delete_removes_under_the_caret() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Delete)), "caret at end deletes nothing");
		input.input(key(KeyCode::Home));
		assert!(input.input(key(KeyCode::Delete)));
		assert_eq!(input.text(), "bc");
	}

	#[test]
	fn ctrl_u_clears_the_query() {
		let mut input = QueryInput::new("abc");
		assert!(input.input(ctrl('u')));
		assert!(input.is_empty());
		assert!(!input.input(ctrl('u')), "clearing an empty query is a no-op");
	}
}
