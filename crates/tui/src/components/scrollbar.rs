//! Vertical scrollbar for the records viewport.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of rows in the content.
	pub content_length: usize,
	/// Number of rows visible in the viewport.
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		let max_scroll = content_length - viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Map a row offset onto the scrollbar's position range.
	#[must_use]
	pub fn scrollbar_position(&self, offset: usize) -> usize {
		if self.max_scroll == 0 {
			0
		} else {
			offset.min(self.max_scroll).saturating_mul(self.content_length - 1) / self.max_scroll
		}
	}
}

/// Draw a scrollbar on the right edge of `area` and return the space left
/// for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border);

	let bar_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		width: area.width.min(1),
		..area
	};
	frame.render_stateful_widget(scrollbar, bar_area, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
