//! Framework-independent model for the paginated record table.
//!
//! The widget crates only render what this crate derives: the column headers,
//! the visible slice of the source records, and the page-control strip. All of
//! the pagination arithmetic lives here so it can be tested without a
//! terminal.

pub mod actions;
pub mod columns;
pub mod error;
pub mod options;
pub mod pagination;
pub mod record;
pub mod view;

pub use actions::{ActionCallbacks, RowAction, RowActions, RowIntent};
pub use columns::{Columns, header_label};
pub use error::TableError;
pub use options::{DEFAULT_ROWS_PER_PAGE, TableOptions};
pub use pagination::{PageChange, Pagination, derive_visible_slice, page_range, total_pages};
pub use record::{Record, RecordId};
pub use view::{PageButton, PageControls, TableModel, TableView, ViewRow};
