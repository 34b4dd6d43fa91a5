use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Stylize;
use ratatui::widgets::{Block, Paragraph};

use crate::input::QueryInput;

/// Render the search box and park the terminal cursor at the caret.
pub fn render_query_input(
	frame: &mut Frame,
	area: Rect,
	input: &QueryInput,
	label: &str,
	placeholder: &str,
) {
	let block = Block::bordered().title(label.to_string());
	let inner = block.inner(area);

	let text = if input.is_empty() {
		Paragraph::new(placeholder.to_string()).dim()
	} else {
		Paragraph::new(input.text().to_string())
	};
	frame.render_widget(text.block(block), area);

	let caret_x = inner.x.saturating_add(input.caret_column()).min(
		inner.x.saturating_add(inner.width.saturating_sub(1)),
	);
	frame.set_cursor_position(Position::new(caret_x, inner.y));
}
