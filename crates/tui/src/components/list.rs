use catalist_catalog_api::RenderPlan;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

/// Build one row per rendered item: icon glyph, then the title.
///
/// Suppressed items contribute no row at all, so row indices line up with
/// the plan's rendered ordering.
#[must_use]
pub fn build_rows(plan: &RenderPlan) -> Vec<ListItem<'static>> {
	plan.rendered_items()
		.map(|item| {
			let line = if item.icon.is_empty() {
				format!("  {}", item.title)
			} else {
				format!("{} {}", item.icon, item.title)
			};
			ListItem::new(line)
		})
		.collect()
}

/// Render the result list, titled with the rendered-item count.
pub fn render_list(
	frame: &mut Frame,
	area: Rect,
	plan: &RenderPlan,
	state: &mut ListState,
	count_label: &str,
	empty_message: &str,
) {
	let title = format!("{count_label} ({})", plan.rendered_count());
	let block = Block::bordered().title(title);

	if plan.rendered_count() == 0 {
		let empty = Paragraph::new(empty_message.to_string())
			.alignment(Alignment::Center)
			.block(block);
		frame.render_widget(empty, area);
		return;
	}

	let list = List::new(build_rows(plan))
		.block(block)
		.highlight_style(Style::default().add_modifier(Modifier::REVERSED))
		.highlight_symbol("> ");
	frame.render_stateful_widget(list, area, state);
}
