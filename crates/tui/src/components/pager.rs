use std::ops::Range;

use pagetable_core::PageControls;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::table::button_label;
use crate::state::HitTarget;
use crate::style::Theme;

const PREVIOUS_LABEL: &str = "Previous";
const NEXT_LABEL: &str = "Next";
/// Summary line plus the button strip.
pub const PAGER_HEIGHT: u16 = 2;

/// A clickable page control as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerButton {
	pub area: Rect,
	pub target: HitTarget,
}

const GAP: u16 = 1;
const ELLIPSIS: &str = "…";

struct Control {
	label: String,
	style: Style,
	target: Option<HitTarget>,
}

fn label_width(label: &str) -> u16 {
	u16::try_from(label.width()).unwrap_or(u16::MAX)
}

/// Range of numbered buttons to draw so that `[Previous]` and `[Next]` stay
/// inside `width`.
///
/// The range grows outwards from the active page, one step right then one
/// step left, while it fits. A `…` marker stands in for each hidden side.
fn page_window(labels: &[u16], active: usize, width: u16) -> Range<usize> {
	if labels.is_empty() {
		return 0..0;
	}
	let fixed = label_width(&button_label(PREVIOUS_LABEL))
		+ GAP
		+ label_width(&button_label(NEXT_LABEL));
	let budget = width.saturating_sub(fixed);
	let marker = label_width(ELLIPSIS) + GAP;
	let cost = |window: &Range<usize>| -> u32 {
		let buttons: u32 = labels[window.clone()]
			.iter()
			.map(|label| u32::from(*label) + u32::from(GAP))
			.sum();
		let hidden = u32::from(window.start > 0) + u32::from(window.end < labels.len());
		buttons + hidden * u32::from(marker)
	};

	let active = active.min(labels.len() - 1);
	let mut window = active..active + 1;
	loop {
		let mut grew = false;
		if window.end < labels.len() && cost(&(window.start..window.end + 1)) <= u32::from(budget) {
			window.end += 1;
			grew = true;
		}
		if window.start > 0 && cost(&(window.start - 1..window.end)) <= u32::from(budget) {
			window.start -= 1;
			grew = true;
		}
		if !grew {
			return window;
		}
	}
}

fn controls(page: &PageControls, theme: &Theme, width: u16) -> Vec<Control> {
	let enabled_or = |enabled: bool, target: HitTarget| Control {
		label: String::new(),
		style: if enabled {
			theme.button
		} else {
			theme.button_disabled
		},
		target: enabled.then_some(target),
	};
	let ellipsis = || Control {
		label: ELLIPSIS.to_owned(),
		style: theme.button_disabled,
		target: None,
	};

	let numbered: Vec<Control> = page
		.pages
		.iter()
		.map(|button| Control {
			label: button_label(&button.number.to_string()),
			style: if button.active {
				theme.button_active
			} else {
				theme.button
			},
			target: Some(HitTarget::Page(button.number)),
		})
		.collect();
	let widths: Vec<u16> = numbered.iter().map(|control| label_width(&control.label)).collect();
	let active = page.pages.iter().position(|button| button.active).unwrap_or(0);
	let window = page_window(&widths, active, width);
	let hidden_before = window.start > 0;
	let hidden_after = window.end < numbered.len();

	let mut out = Vec::with_capacity(window.len() + 4);
	out.push(Control {
		label: button_label(PREVIOUS_LABEL),
		..enabled_or(page.previous_enabled, HitTarget::Previous)
	});
	if hidden_before {
		out.push(ellipsis());
	}
	out.extend(numbered.into_iter().skip(window.start).take(window.len()));
	if hidden_after {
		out.push(ellipsis());
	}
	out.push(Control {
		label: button_label(NEXT_LABEL),
		..enabled_or(page.next_enabled, HitTarget::Next)
	});
	out
}

/// Draw the page summary and the `[Previous] [1] [2] [Next]` strip.
///
/// Returns the screen regions of the controls that can be clicked; disabled
/// controls are drawn but not returned. When the numbered buttons do not fit,
/// only the ones around the current page are drawn.
pub fn render_pager(
	frame: &mut Frame,
	area: Rect,
	page: &PageControls,
	theme: &Theme,
) -> Vec<PagerButton> {
	if area.height == 0 || area.width == 0 {
		return Vec::new();
	}

	let summary_area = Rect { height: 1, ..area };
	frame.render_widget(
		Paragraph::new(Line::styled(page.summary(), theme.footer)),
		summary_area,
	);
	if area.height < PAGER_HEIGHT {
		return Vec::new();
	}

	let strip_area = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let controls = controls(page, theme, strip_area.width);
	let mut spans = Vec::with_capacity(controls.len() * 2);
	let mut buttons = Vec::new();
	let mut x = strip_area.x;
	for (position, control) in controls.into_iter().enumerate() {
		if position > 0 {
			spans.push(Span::raw(" "));
			x = x.saturating_add(GAP);
		}
		let width = label_width(&control.label);
		if let Some(target) = control.target {
			let button_area = Rect::new(x, strip_area.y, width, 1).intersection(strip_area);
			if !button_area.is_empty() {
				buttons.push(PagerButton {
					area: button_area,
					target,
				});
			}
		}
		x = x.saturating_add(width);
		spans.push(Span::styled(control.label, control.style));
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), strip_area);

	buttons
}

#[cfg(test)]
mod tests {
	use pagetable_core::{TableModel, TableOptions};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn controls_for(records: usize, rows_per_page: usize) -> PageControls {
		let options = TableOptions::new()
			.try_with_rows_per_page(rows_per_page)
			.expect("non-zero");
		TableModel::new(options)
			.controls(records)
			.expect("pagination enabled")
	}

	fn draw(page: &PageControls) -> (String, Vec<PagerButton>) {
		let mut terminal = Terminal::new(TestBackend::new(40, 2)).expect("terminal");
		let mut buttons = Vec::new();
		terminal
			.draw(|frame| {
				buttons = render_pager(frame, frame.area(), page, &Theme::default());
			})
			.expect("draw");
		(terminal.backend().to_string(), buttons)
	}

	#[test]
	fn first_page_strip() {
		let (screen, buttons) = draw(&controls_for(10, 7));
		assert!(screen.contains("Showing 1 of 2 pages"));
		assert!(screen.contains("[Previous] [1] [2] [Next]"));

		let targets: Vec<HitTarget> = buttons.iter().map(|button| button.target).collect();
		assert_eq!(
			targets,
			vec![HitTarget::Page(1), HitTarget::Page(2), HitTarget::Next]
		);
		assert_eq!(buttons[0].area, Rect::new(11, 1, 3, 1));
		assert_eq!(buttons[2].area, Rect::new(19, 1, 6, 1));
	}

	#[test]
	fn empty_dataset_has_no_clickable_controls() {
		let (screen, buttons) = draw(&controls_for(0, 5));
		assert!(screen.contains("Showing 1 of 0 pages"));
		assert!(screen.contains("[Previous] [Next]"));
		assert!(buttons.is_empty());
	}

	#[test]
	fn long_strips_keep_next_reachable() {
		let page = controls_for(100, 1);
		let (screen, buttons) = draw(&page);
		assert!(screen.contains("[Previous] [1] [2] [3] [4] [5] … [Next]"));
		assert!(buttons.iter().all(|button| button.area.right() <= 40));
		assert!(buttons.iter().any(|button| button.target == HitTarget::Next));
	}

	#[test]
	fn window_follows_the_current_page() {
		let options = TableOptions::new()
			.try_with_rows_per_page(1)
			.expect("non-zero");
		let mut model = TableModel::new(options);
		model.go_to_page(50, 100);
		let page = model.controls(100).expect("pagination enabled");

		let (screen, buttons) = draw(&page);
		assert!(screen.contains("[Previous] … [49] [50] [51] … [Next]"));
		let targets: Vec<HitTarget> = buttons.iter().map(|button| button.target).collect();
		assert_eq!(
			targets,
			vec![
				HitTarget::Previous,
				HitTarget::Page(49),
				HitTarget::Page(50),
				HitTarget::Page(51),
				HitTarget::Next,
			]
		);
	}

	#[test]
	fn window_sizes() {
		let labels = [3_u16; 10];
		assert_eq!(page_window(&labels, 0, 80), 0..10);
		assert_eq!(page_window(&labels, 9, 40), 5..10);
		assert_eq!(page_window(&labels, 4, 10), 4..5);
		assert_eq!(page_window(&[], 0, 40), 0..0);
	}
}
