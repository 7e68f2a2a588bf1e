//! The page hosting the records table.
//!
//! [`HostPage`] owns the records and reacts to the intents the table reports:
//! every action is logged and, when enabled, deletes are applied to the data.

mod log;
mod runtime;

use pagetable_core::{RecordId, RowActions, RowIntent, TableOptions};
use pagetable_tui::{PagedTableState, TableEvent, Theme};
use ratatui::Frame;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::info;

pub use log::ActionLog;
pub use runtime::run;

use crate::dataset::Dataset;

/// Heading drawn above the table when none is configured.
pub const DEFAULT_HEADING: &str = "Pruebas";
const KEY_HINT: &str = "q quit  ←/→ page  ↑/↓ row  Tab focus  Enter activate";

/// Settings the host page is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
	pub heading: String,
	pub options: TableOptions,
	pub theme: Theme,
	/// Remove records on delete instead of only logging the request.
	pub apply_deletes: bool,
}

impl Default for HostConfig {
	fn default() -> Self {
		Self {
			heading: DEFAULT_HEADING.to_string(),
			options: TableOptions::default(),
			theme: Theme::default(),
			apply_deletes: false,
		}
	}
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostControl {
	Continue,
	Exit,
}

pub struct HostPage {
	heading: String,
	dataset: Dataset,
	table: PagedTableState,
	theme: Theme,
	apply_deletes: bool,
	log: ActionLog,
}

impl HostPage {
	pub fn new(config: HostConfig, dataset: Dataset) -> Self {
		let mut table = PagedTableState::new(config.options);
		table.notify_data_changed(dataset.len());
		Self {
			heading: config.heading,
			dataset,
			table,
			theme: config.theme,
			apply_deletes: config.apply_deletes,
			log: ActionLog::new(),
		}
	}

	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	pub fn table(&self) -> &PagedTableState {
		&self.table
	}

	pub fn action_log(&self) -> &ActionLog {
		&self.log
	}

	pub fn into_action_log(self) -> ActionLog {
		self.log
	}

	/// Draw the heading, the table and the status line.
	pub fn draw(&mut self, frame: &mut Frame) {
		let [heading_area, table_area, status_area] = Layout::vertical([
			Constraint::Length(2),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(frame.area());

		let heading_style = self.theme.title.add_modifier(Modifier::BOLD);
		frame.render_widget(
			Paragraph::new(Line::styled(self.heading.as_str(), heading_style)),
			heading_area,
		);

		let records = self.dataset.records();
		self.table.render(frame, table_area, &records, &self.theme);

		frame.render_widget(
			Paragraph::new(Line::styled(self.status_line(), self.theme.footer)),
			status_area,
		);
	}

	fn status_line(&self) -> String {
		match self.log.last() {
			Some(intent) => format!("last action: {intent}  |  {KEY_HINT}"),
			None => KEY_HINT.to_string(),
		}
	}

	/// Feed one terminal event to the page.
	pub fn handle_event(&mut self, event: &Event) -> HostControl {
		let outcome = match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				if is_exit_key(key) {
					return HostControl::Exit;
				}
				let records = self.dataset.records();
				self.table.handle_key(*key, &records)
			}
			Event::Mouse(mouse) => {
				let records = self.dataset.records();
				self.table.handle_mouse(*mouse, &records)
			}
			_ => None,
		};

		if let Some(event @ TableEvent::Intent(_)) = outcome {
			event.dispatch(self);
		}
		HostControl::Continue
	}

	fn record(&mut self, intent: RowIntent) {
		self.log.push(intent);
	}
}

fn is_exit_key(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Char('q') | KeyCode::Esc => true,
		KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

impl RowActions for HostPage {
	fn on_edit(&mut self, id: RecordId) {
		info!(id, "edit requested");
		self.record(RowIntent::edit(id));
	}

	fn on_delete(&mut self, id: RecordId) {
		info!(id, "delete requested");
		self.record(RowIntent::delete(id));
		if !self.apply_deletes {
			return;
		}
		if self.dataset.remove(id) {
			self.table.notify_data_changed(self.dataset.len());
			info!(id, remaining = self.dataset.len(), "record removed");
		} else {
			tracing::warn!(id, "delete requested for a record that is not loaded");
		}
	}
}

#[cfg(test)]
mod tests;
