//! Derived display state for a table.
//!
//! [`TableModel::view`] is the single place the visible rows, header labels
//! and page controls are computed. It is a pure function of the options, the
//! current page and the source data, so callers re-run it after every state
//! change instead of caching a slice.

use std::num::NonZeroUsize;

use crate::columns::header_label;
use crate::options::TableOptions;
use crate::pagination::{PageChange, Pagination};
use crate::record::{Record, RecordId};

/// Label of the running index column.
pub const INDEX_HEADER: &str = "#";
/// Label of the actions column.
pub const ACTIONS_HEADER: &str = "Actions";

/// Options plus the pagination state of one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
	options: TableOptions,
	pagination: Pagination,
}

impl TableModel {
	#[must_use]
	pub fn new(options: TableOptions) -> Self {
		let pagination = Pagination::new(options.rows_per_page);
		Self {
			options,
			pagination,
		}
	}

	#[must_use]
	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	#[must_use]
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.pagination.current_page()
	}

	#[must_use]
	pub fn rows_per_page(&self) -> NonZeroUsize {
		self.pagination.rows_per_page()
	}

	#[must_use]
	pub fn total_pages(&self, record_count: usize) -> usize {
		self.pagination.total_pages(record_count)
	}

	/// Replace the options, keeping the current page valid for `record_count`.
	pub fn set_options(&mut self, options: TableOptions, record_count: usize) {
		self.pagination
			.set_rows_per_page(options.rows_per_page, record_count);
		self.options = options;
	}

	pub fn previous_page(&mut self) -> PageChange {
		if !self.options.pagination {
			return PageChange::Unchanged;
		}
		self.pagination.previous_page()
	}

	pub fn next_page(&mut self, record_count: usize) -> PageChange {
		if !self.options.pagination {
			return PageChange::Unchanged;
		}
		self.pagination.next_page(record_count)
	}

	pub fn go_to_page(&mut self, page: usize, record_count: usize) -> PageChange {
		if !self.options.pagination {
			return PageChange::Unchanged;
		}
		self.pagination.go_to_page(page, record_count)
	}

	pub fn first_page(&mut self) -> PageChange {
		if !self.options.pagination {
			return PageChange::Unchanged;
		}
		self.pagination.first_page()
	}

	pub fn last_page(&mut self, record_count: usize) -> PageChange {
		if !self.options.pagination {
			return PageChange::Unchanged;
		}
		self.pagination.last_page(record_count)
	}

	/// Re-check the current page after the host changed the data.
	pub fn revalidate(&mut self, record_count: usize) -> bool {
		self.pagination.revalidate(record_count)
	}

	/// Records shown right now; every record when pagination is disabled.
	#[must_use]
	pub fn visible<'a, T>(&self, data: &'a [T]) -> &'a [T] {
		if self.options.pagination {
			self.pagination.visible(data)
		} else {
			data
		}
	}

	/// Header labels: the index column, one per configured column, then actions.
	#[must_use]
	pub fn headers(&self) -> Vec<String> {
		let mut headers = Vec::with_capacity(self.options.columns.len() + 2);
		headers.push(INDEX_HEADER.to_string());
		headers.extend(self.options.columns.keys().iter().map(|key| header_label(key)));
		headers.push(ACTIONS_HEADER.to_string());
		headers
	}

	/// Page controls for `record_count` records, if pagination is enabled.
	#[must_use]
	pub fn controls(&self, record_count: usize) -> Option<PageControls> {
		if !self.options.pagination {
			return None;
		}
		let current_page = self.pagination.current_page();
		let total_pages = self.pagination.total_pages(record_count);
		let pages = (1..=total_pages)
			.map(|number| PageButton {
				number,
				active: number == current_page,
			})
			.collect();
		Some(PageControls {
			current_page,
			total_pages,
			previous_enabled: self.pagination.has_previous(),
			next_enabled: self.pagination.has_next(record_count),
			pages,
		})
	}

	/// Derive everything needed to draw the table for `data`.
	#[must_use]
	pub fn view<R: Record>(&self, data: &[R]) -> TableView {
		let columns = self.options.columns.keys();
		let rows = self
			.visible(data)
			.iter()
			.enumerate()
			.map(|(position, record)| ViewRow {
				index: position + 1,
				id: record.id(),
				cells: columns
					.iter()
					.map(|key| record.field(key).map(|value| value.into_owned()).unwrap_or_default())
					.collect(),
			})
			.collect();

		TableView {
			title: self.options.title.clone(),
			headers: self.headers(),
			rows,
			controls: self.controls(data.len()),
		}
	}
}

/// One rendered row of the visible slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
	/// 1-based position within the visible slice.
	pub index: usize,
	/// Id reported when a row action fires.
	pub id: RecordId,
	/// Display strings, one per configured column.
	pub cells: Vec<String>,
}

/// A numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
	pub number: usize,
	pub active: bool,
}

/// Footer summary and page-control strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
	pub current_page: usize,
	pub total_pages: usize,
	pub previous_enabled: bool,
	pub next_enabled: bool,
	pub pages: Vec<PageButton>,
}

impl PageControls {
	/// Footer text, e.g. `Showing 1 of 2 pages`.
	#[must_use]
	pub fn summary(&self) -> String {
		format!(
			"Showing {} of {} pages",
			self.current_page, self.total_pages
		)
	}
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
	pub title: String,
	pub headers: Vec<String>,
	pub rows: Vec<ViewRow>,
	pub controls: Option<PageControls>,
}

impl TableView {
	/// Ids of the visible rows, in display order.
	pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
		self.rows.iter().map(|row| row.id)
	}
}

#[cfg(test)]
mod tests {
	use std::borrow::Cow;

	use super::*;
	use crate::columns::Columns;

	struct Person {
		id: RecordId,
		name: &'static str,
		age: u32,
	}

	impl Record for Person {
		fn id(&self) -> RecordId {
			self.id
		}

		fn field(&self, key: &str) -> Option<Cow<'_, str>> {
			match key {
				"id" => Some(Cow::Owned(self.id.to_string())),
				"name" => Some(Cow::Borrowed(self.name)),
				"age" => Some(Cow::Owned(self.age.to_string())),
				_ => None,
			}
		}
	}

	const NAMES: [&str; 10] = [
		"Juan", "Pedro", "Luis", "Carlos", "Jose", "Jorge", "Ricardo", "Miguel", "Javier",
		"Cristian",
	];

	fn people() -> Vec<Person> {
		NAMES
			.iter()
			.zip(1..)
			.map(|(&name, id)| Person { id, name, age: 25 })
			.collect()
	}

	fn model(columns: &[&str], rows_per_page: usize) -> TableModel {
		let options = TableOptions::new()
			.with_title("usuarios")
			.with_columns(Columns::new(columns.iter().copied()))
			.try_with_rows_per_page(rows_per_page)
			.expect("non-zero");
		TableModel::new(options)
	}

	#[test]
	fn headers_wrap_columns_with_index_and_actions() {
		let model = model(&["name", "age"], 7);
		insta::assert_snapshot!(model.headers().join(" | "), @"# | Name | Age | Actions");
	}

	#[test]
	fn ten_records_seven_per_page() {
		let data = people();
		let mut model = model(&["name", "age"], 7);

		let first = model.view(&data);
		assert_eq!(first.ids().collect::<Vec<_>>(), (1..=7).collect::<Vec<RecordId>>());
		let controls = first.controls.expect("pagination enabled");
		assert_eq!(controls.total_pages, 2);
		assert!(!controls.previous_enabled);
		assert!(controls.next_enabled);
		insta::assert_snapshot!(controls.summary(), @"Showing 1 of 2 pages");

		model.next_page(data.len());
		let second = model.view(&data);
		assert_eq!(second.ids().collect::<Vec<_>>(), vec![8, 9, 10_u64]);
		let controls = second.controls.expect("pagination enabled");
		assert!(controls.previous_enabled);
		assert!(!controls.next_enabled);
		assert_eq!(
			controls.pages,
			vec![
				PageButton {
					number: 1,
					active: false
				},
				PageButton {
					number: 2,
					active: true
				},
			]
		);
	}

	#[test]
	fn page_three_with_two_per_page_shows_records_five_and_six() {
		let data = people();
		let mut model = model(&["id", "name", "age"], 2);
		assert_eq!(model.total_pages(data.len()), 5);

		model.go_to_page(3, data.len());
		let view = model.view(&data);
		assert_eq!(view.rows.len(), 2);
		assert_eq!(view.rows[0].cells, vec!["5", "Jose", "25"]);
		assert_eq!(view.rows[1].cells, vec!["6", "Jorge", "25"]);
	}

	#[test]
	fn index_column_restarts_on_each_page() {
		let data = people();
		let mut model = model(&["name"], 4);
		model.go_to_page(2, data.len());
		let view = model.view(&data);
		let indexes: Vec<_> = view.rows.iter().map(|row| row.index).collect();
		assert_eq!(indexes, vec![1, 2, 3, 4]);
		assert_eq!(view.rows[0].id, 5);
	}

	#[test]
	fn missing_column_renders_blank_cell() {
		let data = people();
		let view = model(&["name", "email"], 5).view(&data);
		assert_eq!(view.rows[0].cells, vec!["Juan", ""]);
	}

	#[test]
	fn empty_dataset_renders_header_only() {
		let data: Vec<Person> = Vec::new();
		let mut model = model(&["name", "age"], 5);
		let view = model.view(&data);

		assert_eq!(view.headers.len(), 4);
		assert!(view.rows.is_empty());
		let controls = view.controls.expect("pagination enabled");
		assert_eq!(controls.total_pages, 0);
		assert!(controls.pages.is_empty());
		assert!(!controls.previous_enabled);
		assert!(!controls.next_enabled);
		insta::assert_snapshot!(controls.summary(), @"Showing 1 of 0 pages");

		assert_eq!(model.next_page(0), PageChange::Unchanged);
		assert_eq!(model.current_page(), 1);
	}

	#[test]
	fn disabled_pagination_shows_every_row_without_controls() {
		let data = people();
		let options = TableOptions::new()
			.with_columns(["name"])
			.with_pagination(false)
			.try_with_rows_per_page(3)
			.expect("non-zero");
		let mut model = TableModel::new(options);

		let view = model.view(&data);
		assert_eq!(view.rows.len(), 10);
		assert!(view.controls.is_none());
		assert_eq!(model.next_page(data.len()), PageChange::Unchanged);
	}

	#[test]
	fn shrinking_options_revalidate_the_page() {
		let data = people();
		let mut model = model(&["name"], 2);
		model.last_page(data.len());
		assert_eq!(model.current_page(), 5);

		let wider = model.options().clone().try_with_rows_per_page(5).expect("non-zero");
		model.set_options(wider, data.len());
		assert_eq!(model.current_page(), 2);
	}
}
