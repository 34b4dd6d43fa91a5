use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::widgets::Paragraph;

/// Render the live-region status line showing the last announcement.
pub fn render_status(frame: &mut Frame, area: Rect, message: Option<&str>) {
	let Some(message) = message else {
		return;
	};
	frame.render_widget(Paragraph::new(message.to_string()).dim().italic(), area);
}
