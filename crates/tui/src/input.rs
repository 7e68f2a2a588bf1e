use pagetable_core::{Record, RecordId, RowAction, RowActions, RowIntent, TableModel};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::state::{HitTarget, PagedTableState, TableEvent};

impl PagedTableState {
	/// Process a keyboard event against the records currently shown.
	///
	/// Row actions are returned as [`TableEvent::Intent`]; nothing is
	/// dispatched here so the caller can mutate its records afterwards.
	pub fn handle_key<R: Record>(&mut self, key: KeyEvent, data: &[R]) -> Option<TableEvent> {
		if key.kind == KeyEventKind::Release {
			return None;
		}
		let record_count = data.len();
		let ids = self.visible_ids(data);

		match key.code {
			KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, ids.len()),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, ids.len()),
			KeyCode::Tab | KeyCode::BackTab => {
				self.focused_action = self.focused_action.toggled();
				Some(TableEvent::SelectionChanged)
			}
			KeyCode::Enter | KeyCode::Char(' ') => {
				self.intent_for_selection(&ids, self.focused_action)
			}
			KeyCode::Char('e') => self.intent_for_selection(&ids, RowAction::Edit),
			KeyCode::Char('d') | KeyCode::Delete => {
				self.intent_for_selection(&ids, RowAction::Delete)
			}
			KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
				self.page_transition(record_count, |model, _| model.previous_page())
			}
			KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
				self.page_transition(record_count, TableModel::next_page)
			}
			KeyCode::Home => self.page_transition(record_count, |model, _| model.first_page()),
			KeyCode::End => self.page_transition(record_count, TableModel::last_page),
			KeyCode::Char(digit @ '1'..='9') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				let page = digit.to_digit(10).map_or(1, |value| value as usize);
				self.page_transition(record_count, |model, count| model.go_to_page(page, count))
			}
			_ => None,
		}
	}

	/// Process a mouse event using the regions recorded by the last render.
	pub fn handle_mouse<R: Record>(&mut self, mouse: MouseEvent, data: &[R]) -> Option<TableEvent> {
		let record_count = data.len();
		match mouse.kind {
			MouseEventKind::ScrollUp => {
				let visible = self.visible_len(record_count);
				self.move_selection(-1, visible)
			}
			MouseEventKind::ScrollDown => {
				let visible = self.visible_len(record_count);
				self.move_selection(1, visible)
			}
			MouseEventKind::Down(MouseButton::Left) => {
				let target = self.hit_test(Position::new(mouse.column, mouse.row))?;
				self.activate(target, data)
			}
			_ => None,
		}
	}

	/// Handle a key and hand any resulting intent straight to `actions`.
	pub fn handle_key_with<R: Record, A: RowActions>(
		&mut self,
		key: KeyEvent,
		data: &[R],
		actions: &mut A,
	) -> Option<TableEvent> {
		let event = self.handle_key(key, data)?;
		event.dispatch(actions);
		Some(event)
	}

	/// Handle a mouse event and hand any resulting intent straight to `actions`.
	pub fn handle_mouse_with<R: Record, A: RowActions>(
		&mut self,
		mouse: MouseEvent,
		data: &[R],
		actions: &mut A,
	) -> Option<TableEvent> {
		let event = self.handle_mouse(mouse, data)?;
		event.dispatch(actions);
		Some(event)
	}

	fn activate<R: Record>(&mut self, target: HitTarget, data: &[R]) -> Option<TableEvent> {
		let record_count = data.len();
		match target {
			HitTarget::Action { row, id, action } => {
				// Regions outlive the frame; the row may hold another record by now.
				let current = self.model.visible(data).get(row).map(Record::id);
				if current != Some(id) {
					tracing::debug!(row, id, ?current, "ignoring click on a stale row");
					return None;
				}
				self.table_state.select(Some(row));
				self.focused_action = action;
				Some(TableEvent::Intent(RowIntent { action, id }))
			}
			HitTarget::Previous => {
				self.page_transition(record_count, |model, _| model.previous_page())
			}
			HitTarget::Next => self.page_transition(record_count, TableModel::next_page),
			HitTarget::Page(page) => {
				self.page_transition(record_count, |model, count| model.go_to_page(page, count))
			}
		}
	}

	fn move_selection(&mut self, delta: isize, visible: usize) -> Option<TableEvent> {
		if visible == 0 {
			return None;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(visible - 1);
		if Some(next) == self.table_state.selected() {
			return None;
		}
		self.table_state.select(Some(next));
		Some(TableEvent::SelectionChanged)
	}

	fn visible_ids<R: Record>(&self, data: &[R]) -> Vec<RecordId> {
		self.model.visible(data).iter().map(Record::id).collect()
	}
}

#[cfg(test)]
mod tests {
	use pagetable_core::{ActionCallbacks, TableOptions};
	use ratatui::crossterm::event::KeyEventState;
	use serde_json::{Value, json};

	use super::*;

	fn users(count: u64) -> Vec<Value> {
		(1..=count)
			.map(|id| json!({ "id": id, "name": format!("user {id}"), "age": 20 + id }))
			.collect()
	}

	fn state(rows_per_page: usize) -> PagedTableState {
		let options = TableOptions::new()
			.with_columns(["name", "age"])
			.try_with_rows_per_page(rows_per_page)
			.expect("non-zero");
		PagedTableState::new(options)
	}

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		}
	}

	#[test]
	fn arrows_page_through_the_data() {
		let data = users(10);
		let mut table = state(7);

		assert_eq!(table.handle_key(press(KeyCode::Left), &data), None);
		assert_eq!(
			table.handle_key(press(KeyCode::Right), &data),
			Some(TableEvent::PageChanged { from: 1, to: 2 })
		);
		assert_eq!(table.handle_key(press(KeyCode::Right), &data), None);
		assert_eq!(table.current_page(), 2);
	}

	#[test]
	fn digits_jump_and_clamp() {
		let data = users(10);
		let mut table = state(2);

		table.handle_key(press(KeyCode::Char('3')), &data);
		assert_eq!(table.current_page(), 3);

		table.handle_key(press(KeyCode::Char('9')), &data);
		assert_eq!(table.current_page(), 5);
	}

	#[test]
	fn edit_reports_the_record_id_not_the_row_index() {
		let data = users(10);
		let mut table = state(2);
		table.handle_key(press(KeyCode::Char('3')), &data);
		table.handle_key(press(KeyCode::Down), &data);

		let mut edits = Vec::new();
		let mut deletes = Vec::new();
		let mut callbacks = ActionCallbacks::new(|id| edits.push(id), |id| deletes.push(id));
		let event = table.handle_key_with(press(KeyCode::Char('e')), &data, &mut callbacks);
		drop(callbacks);

		assert_eq!(event, Some(TableEvent::Intent(RowIntent::edit(6))));
		assert_eq!(edits, vec![6]);
		assert!(deletes.is_empty());
	}

	#[test]
	fn enter_uses_the_focused_button() {
		let data = users(3);
		let mut table = state(5);

		assert_eq!(
			table.handle_key(press(KeyCode::Tab), &data),
			Some(TableEvent::SelectionChanged)
		);
		assert_eq!(table.focused_action(), RowAction::Delete);
		assert_eq!(
			table.handle_key(press(KeyCode::Enter), &data),
			Some(TableEvent::Intent(RowIntent::delete(1)))
		);
	}

	#[test]
	fn selection_stays_inside_the_visible_slice() {
		let data = users(10);
		let mut table = state(7);
		table.handle_key(press(KeyCode::End), &data);
		for _ in 0..5 {
			table.handle_key(press(KeyCode::Down), &data);
		}
		assert_eq!(table.selected_row(), Some(2));

		table.handle_key(press(KeyCode::Home), &data);
		assert_eq!(table.current_page(), 1);
		assert_eq!(table.selected_row(), Some(0));
	}

	#[test]
	fn empty_dataset_reports_no_intents() {
		let data: Vec<Value> = Vec::new();
		let mut table = state(5);
		table.notify_data_changed(0);

		assert_eq!(table.handle_key(press(KeyCode::Char('e')), &data), None);
		assert_eq!(table.handle_key(press(KeyCode::Right), &data), None);
		assert_eq!(table.selected_row(), None);
	}

	#[test]
	fn page_keys_do_nothing_without_pagination() {
		let data = users(10);
		let options = TableOptions::new()
			.with_columns(["name"])
			.with_pagination(false);
		let mut table = PagedTableState::new(options);

		assert_eq!(table.handle_key(press(KeyCode::Right), &data), None);
		for _ in 0..12 {
			table.handle_key(press(KeyCode::Down), &data);
		}
		assert_eq!(table.selected_row(), Some(9));
	}

	#[test]
	fn deleting_the_last_record_of_a_page_moves_back() {
		let mut data = users(11);
		let mut table = state(5);
		table.handle_key(press(KeyCode::End), &data);
		assert_eq!(table.current_page(), 3);

		data.pop();
		table.notify_data_changed(data.len());
		assert_eq!(table.current_page(), 2);
		assert_eq!(table.selected_row(), Some(0));
	}

	fn click_at(area: ratatui::layout::Rect) -> MouseEvent {
		MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: area.x,
			row: area.y,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn clicks_on_a_row_that_now_holds_another_record_are_ignored() {
		let mut data = users(4);
		let mut table = state(5);
		let area = ratatui::layout::Rect::new(30, 4, 8, 1);
		table.hitboxes.push(crate::state::HitBox {
			area,
			target: HitTarget::Action {
				row: 1,
				id: 2,
				action: RowAction::Delete,
			},
		});

		data.remove(1);
		assert_eq!(table.handle_mouse(click_at(area), &data), None);
		assert_eq!(table.focused_action(), RowAction::Edit);
	}

	#[test]
	fn data_changes_forget_the_recorded_regions() {
		let mut data = users(4);
		let mut table = state(5);
		let area = ratatui::layout::Rect::new(30, 4, 8, 1);
		table.hitboxes.push(crate::state::HitBox {
			area,
			target: HitTarget::Action {
				row: 0,
				id: 1,
				action: RowAction::Delete,
			},
		});
		assert_eq!(
			table.handle_mouse(click_at(area), &data),
			Some(TableEvent::Intent(RowIntent::delete(1)))
		);

		data.remove(0);
		table.notify_data_changed(data.len());
		assert_eq!(table.hit_targets().count(), 0);
		assert_eq!(table.handle_mouse(click_at(area), &data), None);
	}
}
