use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::style::Stylize;
use ratatui::widgets::Paragraph;

use super::state::App;
use crate::components::{render_list, render_query_input, render_status};

impl App {
	/// Draw one frame: header, search box, list, live-region status line.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		frame.render_widget(
			Paragraph::new(self.labels.panel_title.clone()).bold(),
			layout[0],
		);
		frame.render_widget(
			Paragraph::new(self.labels.panel_description.clone()).dim(),
			layout[1],
		);
		render_query_input(
			frame,
			layout[2],
			&self.search_input,
			&self.labels.search_label,
			&self.labels.search_placeholder,
		);
		render_list(
			frame,
			layout[3],
			&self.plan,
			&mut self.list_state,
			&self.labels.count_label,
			&self.labels.empty_message,
		);
		render_status(frame, layout[4], self.live_region.last());
	}
}
