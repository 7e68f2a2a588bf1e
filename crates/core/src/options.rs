use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::columns::Columns;
use crate::error::TableError;

/// Page size used when none is configured.
pub const DEFAULT_ROWS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
	Some(value) => value,
	None => unreachable!(),
};

/// Configuration surface of the table widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
	/// Heading rendered above the table.
	pub title: String,
	/// Field keys to display, in order.
	pub columns: Columns,
	/// Whether rows are split into pages with a control strip.
	pub pagination: bool,
	/// Page size.
	pub rows_per_page: NonZeroUsize,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			title: String::new(),
			columns: Columns::default(),
			pagination: true,
			rows_per_page: DEFAULT_ROWS_PER_PAGE,
		}
	}
}

impl TableOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_columns(mut self, columns: impl Into<Columns>) -> Self {
		self.columns = columns.into();
		self
	}

	#[must_use]
	pub fn with_pagination(mut self, enabled: bool) -> Self {
		self.pagination = enabled;
		self
	}

	#[must_use]
	pub fn with_rows_per_page(mut self, rows_per_page: NonZeroUsize) -> Self {
		self.rows_per_page = rows_per_page;
		self
	}

	/// Set the page size from an unchecked count.
	///
	/// # Errors
	///
	/// Returns [`TableError::ZeroRowsPerPage`] when `rows_per_page` is zero.
	pub fn try_with_rows_per_page(self, rows_per_page: usize) -> Result<Self, TableError> {
		let rows_per_page = NonZeroUsize::new(rows_per_page).ok_or(TableError::ZeroRowsPerPage)?;
		Ok(self.with_rows_per_page(rows_per_page))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_enable_pagination_with_five_rows() {
		let options = TableOptions::default();
		assert!(options.pagination);
		assert_eq!(options.rows_per_page.get(), 5);
		assert!(options.columns.is_empty());
	}

	#[test]
	fn zero_rows_per_page_is_rejected() {
		let err = TableOptions::new().try_with_rows_per_page(0).unwrap_err();
		assert_eq!(err, TableError::ZeroRowsPerPage);
		assert_eq!(err.to_string(), "rows per page must be greater than zero");
	}

	#[test]
	fn builder_sets_every_option() {
		let options = TableOptions::new()
			.with_title("usuarios")
			.with_columns(["name", "age"])
			.with_pagination(false)
			.try_with_rows_per_page(7)
			.expect("non-zero");

		assert_eq!(options.title, "usuarios");
		assert_eq!(options.columns.keys(), ["name", "age"]);
		assert!(!options.pagination);
		assert_eq!(options.rows_per_page.get(), 7);
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let options: TableOptions =
			serde_json::from_str(r#"{ "title": "Users", "rows_per_page": 7 }"#).expect("valid");
		assert_eq!(options.title, "Users");
		assert_eq!(options.rows_per_page.get(), 7);
		assert!(options.pagination);

		let zero = serde_json::from_str::<TableOptions>(r#"{ "rows_per_page": 0 }"#);
		assert!(zero.is_err());
	}
}
