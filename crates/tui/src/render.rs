use pagetable_core::Record;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::components::{PAGER_HEIGHT, render_pager, render_records};
use crate::state::{HitBox, HitTarget, PagedTableState};
use crate::style::Theme;

impl PagedTableState {
	/// Draw the title, the current page of `data` and the page controls.
	///
	/// Clickable regions are recorded for the next [`Self::handle_mouse`].
	pub fn render<R: Record>(&mut self, frame: &mut Frame, area: Rect, data: &[R], theme: &Theme) {
		self.model.revalidate(data.len());
		self.clamp_selection(data.len());
		self.hitboxes.clear();

		let view = self.model.view(data);
		let title_height = u16::from(!view.title.is_empty());
		let footer_height = if view.controls.is_some() {
			PAGER_HEIGHT
		} else {
			0
		};
		let [title_area, table_area, footer_area] = Layout::vertical([
			Constraint::Length(title_height),
			Constraint::Min(0),
			Constraint::Length(footer_height),
		])
		.areas(area);

		if title_height > 0 {
			frame.render_widget(
				Paragraph::new(Line::styled(view.title.as_str(), theme.title)),
				title_area,
			);
		}

		let rows = render_records(
			frame,
			table_area,
			&view,
			&mut self.table_state,
			self.focused_action,
			theme,
		);
		for rendered in rows {
			let Some(id) = view.rows.get(rendered.row).map(|row| row.id) else {
				continue;
			};
			self.hitboxes
				.extend(rendered.buttons.into_iter().map(|button| HitBox {
					area: button.area,
					target: HitTarget::Action {
						row: rendered.row,
						id,
						action: button.action,
					},
				}));
		}

		if let Some(controls) = &view.controls {
			let buttons = render_pager(frame, footer_area, controls, theme);
			self.hitboxes
				.extend(buttons.into_iter().map(|button| HitBox {
					area: button.area,
					target: button.target,
				}));
		}
	}
}
