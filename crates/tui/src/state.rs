use pagetable_core::{
	PageChange, RecordId, RowAction, RowActions, RowIntent, TableModel, TableOptions,
};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::TableState;

/// Clickable element recorded while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
	/// A row action button; `row` is the position within the visible slice.
	Action {
		row: usize,
		id: RecordId,
		action: RowAction,
	},
	Previous,
	Next,
	Page(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HitBox {
	pub(crate) area: Rect,
	pub(crate) target: HitTarget,
}

/// Something the table did in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
	/// The current page changed.
	PageChanged { from: usize, to: usize },
	/// The selected row or the focused action button changed.
	SelectionChanged,
	/// The user asked for a row action; the host decides what happens.
	Intent(RowIntent),
}

impl TableEvent {
	/// Forward an intent to `actions`. Returns `true` if a callback ran.
	pub fn dispatch<A: RowActions + ?Sized>(self, actions: &mut A) -> bool {
		match self {
			Self::Intent(intent) => {
				actions.dispatch(intent);
				true
			}
			Self::PageChanged { .. } | Self::SelectionChanged => false,
		}
	}
}

/// Interaction state of one paged table.
#[derive(Debug, Clone)]
pub struct PagedTableState {
	pub(crate) model: TableModel,
	pub(crate) table_state: TableState,
	pub(crate) focused_action: RowAction,
	pub(crate) hitboxes: Vec<HitBox>,
}

impl PagedTableState {
	#[must_use]
	pub fn new(options: TableOptions) -> Self {
		Self {
			model: TableModel::new(options),
			table_state: TableState::default().with_selected(Some(0)),
			focused_action: RowAction::Edit,
			hitboxes: Vec::new(),
		}
	}

	#[must_use]
	pub fn model(&self) -> &TableModel {
		&self.model
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.model.current_page()
	}

	/// Position of the selected row within the visible slice.
	#[must_use]
	pub fn selected_row(&self) -> Option<usize> {
		self.table_state.selected()
	}

	#[must_use]
	pub fn focused_action(&self) -> RowAction {
		self.focused_action
	}

	/// Regions that respond to mouse clicks, as laid out by the last render.
	pub fn hit_targets(&self) -> impl Iterator<Item = (Rect, HitTarget)> + '_ {
		self.hitboxes.iter().map(|hitbox| (hitbox.area, hitbox.target))
	}

	pub(crate) fn hit_test(&self, position: Position) -> Option<HitTarget> {
		self.hitboxes
			.iter()
			.find(|hitbox| hitbox.area.contains(position))
			.map(|hitbox| hitbox.target)
	}

	/// Replace the options and keep page and selection valid.
	pub fn set_options(&mut self, options: TableOptions, record_count: usize) {
		self.model.set_options(options, record_count);
		self.clamp_selection(record_count);
	}

	/// Re-check page and selection after the host mutated the records.
	pub fn notify_data_changed(&mut self, record_count: usize) {
		if self.model.revalidate(record_count) {
			tracing::debug!(
				page = self.model.current_page(),
				record_count,
				"current page pulled back into range"
			);
		}
		self.hitboxes.clear();
		self.clamp_selection(record_count);
	}

	pub(crate) fn visible_len(&self, record_count: usize) -> usize {
		if self.model.options().pagination {
			self.model.pagination().range(record_count).len()
		} else {
			record_count
		}
	}

	pub(crate) fn clamp_selection(&mut self, record_count: usize) {
		let visible = self.visible_len(record_count);
		let selected = match (visible, self.table_state.selected()) {
			(0, _) => None,
			(len, Some(row)) => Some(row.min(len - 1)),
			(_, None) => Some(0),
		};
		self.table_state.select(selected);
	}

	/// Apply a page transition and reset the selection when the page moved.
	pub(crate) fn page_transition(
		&mut self,
		record_count: usize,
		transition: impl FnOnce(&mut TableModel, usize) -> PageChange,
	) -> Option<TableEvent> {
		let from = self.model.current_page();
		let change = transition(&mut self.model, record_count);
		let to = self.model.current_page();
		if change == PageChange::Clamped {
			tracing::debug!(from, to, "page request clamped into range");
		}
		if from == to {
			return None;
		}
		tracing::debug!(from, to, "page changed");
		self.hitboxes.clear();
		self.table_state.select(Some(0));
		self.clamp_selection(record_count);
		Some(TableEvent::PageChanged { from, to })
	}

	/// Intent for the selected row using `action`.
	pub(crate) fn intent_for_selection(
		&self,
		ids: &[RecordId],
		action: RowAction,
	) -> Option<TableEvent> {
		let row = self.table_state.selected()?;
		let id = *ids.get(row)?;
		Some(TableEvent::Intent(RowIntent { action, id }))
	}
}
