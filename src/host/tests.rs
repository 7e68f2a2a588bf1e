use pagetable_core::{Record, RowAction, TableOptions};
use pagetable_tui::HitTarget;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::*;

fn options(rows_per_page: usize) -> TableOptions {
	TableOptions::new()
		.with_title("usuarios")
		.with_columns(["name", "age"])
		.try_with_rows_per_page(rows_per_page)
		.expect("non-zero")
}

fn page(rows_per_page: usize, apply_deletes: bool) -> HostPage {
	let config = HostConfig {
		options: options(rows_per_page),
		apply_deletes,
		..HostConfig::default()
	};
	HostPage::new(config, Dataset::demo())
}

fn key(code: KeyCode) -> Event {
	Event::Key(KeyEvent::from(code))
}

fn render(page: &mut HostPage) -> String {
	let mut terminal = Terminal::new(TestBackend::new(70, 18)).expect("terminal");
	terminal.draw(|frame| page.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

#[test]
fn edit_is_logged_with_the_record_id() {
	let mut host = page(2, false);
	host.handle_event(&key(KeyCode::Char('3')));
	host.handle_event(&key(KeyCode::Down));
	assert_eq!(host.handle_event(&key(KeyCode::Char('e'))), HostControl::Continue);

	assert_eq!(host.action_log().entries(), &[RowIntent::edit(6)]);
	assert_eq!(host.dataset().len(), 10);
}

#[test]
fn deletes_are_only_logged_by_default() {
	let mut host = page(7, false);
	host.handle_event(&key(KeyCode::Char('d')));

	assert_eq!(host.action_log().entries(), &[RowIntent::delete(1)]);
	assert_eq!(host.dataset().len(), 10);
}

#[test]
fn applied_delete_revalidates_the_page() {
	let mut host = page(3, true);
	host.handle_event(&key(KeyCode::End));
	assert_eq!(host.table().current_page(), 4);

	host.handle_event(&key(KeyCode::Delete));
	assert_eq!(host.dataset().len(), 9);
	assert_eq!(host.table().current_page(), 3);
	assert_eq!(host.action_log().last(), Some(&RowIntent::delete(10)));
}

#[test]
fn exit_keys_stop_the_loop() {
	let mut host = page(5, false);
	assert_eq!(host.handle_event(&key(KeyCode::Char('q'))), HostControl::Exit);
	assert_eq!(host.handle_event(&key(KeyCode::Esc)), HostControl::Exit);
	let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
	assert_eq!(host.handle_event(&ctrl_c), HostControl::Exit);
	assert!(host.action_log().is_empty());
}

#[test]
fn frame_shows_heading_table_and_status() {
	let mut host = page(7, false);
	let screen = render(&mut host);
	assert!(screen.contains("Pruebas"));
	assert!(screen.contains("usuarios"));
	assert!(screen.contains("Showing 1 of 2 pages"));
	assert!(screen.contains("q quit"));

	host.handle_event(&key(KeyCode::Char('e')));
	let screen = render(&mut host);
	assert!(screen.contains("last action: edit 1"));
}

#[test]
fn clicking_delete_goes_through_the_host() {
	let mut host = page(7, true);
	render(&mut host);
	let area = host
		.table()
		.hit_targets()
		.find_map(|(area, target)| match target {
			HitTarget::Action {
				id: 4,
				action: RowAction::Delete,
				..
			} => Some(area),
			_ => None,
		})
		.expect("delete button for record 4");

	host.handle_event(&Event::Mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	}));

	assert_eq!(host.action_log().entries(), &[RowIntent::delete(4)]);
	assert!(host.dataset().records().iter().all(|record| record.id() != 4));
}

#[test]
fn second_click_before_redraw_does_not_repeat_a_delete() {
	let mut host = page(7, true);
	render(&mut host);
	let area = host
		.table()
		.hit_targets()
		.find_map(|(area, target)| match target {
			HitTarget::Action {
				id: 4,
				action: RowAction::Delete,
				..
			} => Some(area),
			_ => None,
		})
		.expect("delete button for record 4");
	let click = Event::Mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	});

	host.handle_event(&click);
	host.handle_event(&click);

	assert_eq!(host.action_log().entries(), &[RowIntent::delete(4)]);
	assert_eq!(host.dataset().len(), 9);

	render(&mut host);
	host.handle_event(&click);
	assert_eq!(host.action_log().entries(), &[RowIntent::delete(4), RowIntent::delete(5)]);
	assert_eq!(host.dataset().len(), 8);
}
