use pagetable_core::{RowAction, TableView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
const EMPTY_MESSAGE: &str = "No records";

/// Row action button as drawn inside the actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
	pub action: RowAction,
	pub area: Rect,
}

/// Screen position of one drawn data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
	/// Position within the visible slice.
	pub row: usize,
	pub buttons: Vec<ActionButton>,
}

/// Bracketed label used for every button in the widget.
#[must_use]
pub fn button_label(label: &str) -> String {
	format!("[{label}]")
}

fn actions_column_width() -> u16 {
	let labels: usize = RowAction::ALL
		.iter()
		.map(|action| button_label(action.label()).width())
		.sum();
	let gaps = RowAction::ALL.len().saturating_sub(1);
	u16::try_from(labels + gaps).unwrap_or(u16::MAX)
}

fn index_column_width(row_count: usize) -> u16 {
	let digits = row_count.max(1).to_string().len();
	u16::try_from(digits).unwrap_or(u16::MAX)
}

/// Column constraints: index, one fill column per data column, actions.
fn column_constraints(view: &TableView) -> Vec<Constraint> {
	let data_columns = view.headers.len().saturating_sub(2);
	let mut widths = Vec::with_capacity(data_columns + 2);
	widths.push(Constraint::Length(index_column_width(view.rows.len())));
	widths.extend(std::iter::repeat_n(Constraint::Fill(1), data_columns));
	widths.push(Constraint::Length(actions_column_width()));
	widths
}

/// Render the bordered records table and return where each row landed.
pub fn render_records(
	frame: &mut Frame,
	area: Rect,
	view: &TableView,
	table_state: &mut TableState,
	focused: RowAction,
	theme: &Theme,
) -> Vec<RenderedRow> {
	let block = Block::bordered()
		.border_set(border::ROUNDED)
		.border_style(theme.border);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return Vec::new();
	}

	let body_height = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let metrics = ScrollMetrics::compute(view.rows.len(), body_height);
	let table_area = if metrics.needs_scrollbar {
		let mut scrollbar_state = ScrollbarState::new(metrics.content_length)
			.position(metrics.scrollbar_position(table_state.offset()))
			.viewport_content_length(metrics.viewport_len);
		render_scrollbar(frame, inner, &mut scrollbar_state, theme)
	} else {
		inner
	};

	let widths = column_constraints(view);
	let header = Row::new(view.headers.iter().map(|label| Cell::from(label.as_str())))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);
	let selected = table_state.selected();
	let rows = view.rows.iter().enumerate().map(|(position, row)| {
		let focus = (selected == Some(position)).then_some(focused);
		let mut cells = Vec::with_capacity(row.cells.len() + 2);
		cells.push(Cell::from(row.index.to_string()));
		cells.extend(row.cells.iter().map(|value| Cell::from(value.as_str())));
		cells.push(Cell::from(action_buttons_line(focus, theme)));
		Row::new(cells)
	});

	let table = Table::new(rows, widths.clone())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.flex(Flex::Start)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme, 1);

	if view.rows.is_empty() {
		render_empty(frame, table_area, theme);
		return Vec::new();
	}

	locate_rows(table_area, &widths, view.rows.len(), table_state.offset())
}

fn action_buttons_line(focus: Option<RowAction>, theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(RowAction::ALL.len() * 2);
	for (position, action) in RowAction::ALL.into_iter().enumerate() {
		if position > 0 {
			spans.push(Span::raw(" "));
		}
		let style = if focus == Some(action) {
			theme.button_focus
		} else {
			match action {
				RowAction::Edit => theme.edit,
				RowAction::Delete => theme.delete,
			}
		};
		spans.push(Span::styled(button_label(action.label()), style));
	}
	Line::from(spans)
}

/// Work out the on-screen rectangles of each drawn row's action buttons.
///
/// Mirrors the column layout `Table` uses so mouse clicks can be mapped back
/// to rows.
fn locate_rows(
	area: Rect,
	widths: &[Constraint],
	row_count: usize,
	offset: usize,
) -> Vec<RenderedRow> {
	let Some(actions_column) = resolve_column_areas(area, widths).last().copied() else {
		return Vec::new();
	};
	let first_row_y = area.y.saturating_add(TABLE_HEADER_ROWS);

	(offset..row_count)
		.zip(first_row_y..area.bottom())
		.map(|(row, y)| {
			let mut x = actions_column.x;
			let mut buttons = Vec::with_capacity(RowAction::ALL.len());
			let cell = Rect::new(actions_column.x, y, actions_column.width, 1);
			for action in RowAction::ALL {
				let label_width =
					u16::try_from(button_label(action.label()).width()).unwrap_or(u16::MAX);
				let button = Rect::new(x, y, label_width, 1).intersection(cell);
				if !button.is_empty() {
					buttons.push(ActionButton {
						action,
						area: button,
					});
				}
				x = x.saturating_add(label_width).saturating_add(1);
			}
			RenderedRow { row, buttons }
		})
		.collect()
}

fn resolve_column_areas(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
	if constraints.is_empty() {
		return Vec::new();
	}

	let selection_width = u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(0);
	let [_, columns_area] =
		Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
			.areas(Rect::new(area.x, area.y, area.width, 1));

	Layout::horizontal(constraints.to_vec())
		.flex(Flex::Start)
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.to_vec()
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = usize::from(area.width);
	if width == 0 {
		return;
	}

	let sep_rect = Rect::new(area.x, area.y + header_height, area.width, 1);
	let style = theme.separator_style();
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)).style(style), sep_rect);
		return;
	}

	let spans = vec![
		Span::styled(" ", style),
		Span::styled("─".repeat(width - 2), style),
		Span::styled(" ", style),
	];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}

fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect::new(area.x, area.y + TABLE_HEADER_ROWS, area.width, 1);
	let empty = Paragraph::new(Line::styled(EMPTY_MESSAGE, theme.empty)).alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}
