//! Building blocks drawn by [`crate::PagedTableState::render`].

/// Footer summary and page buttons.
pub mod pager;
/// Scrollbar for the records viewport.
pub mod scrollbar;
/// Records table with per-row action buttons.
pub mod table;

pub use pager::{PAGER_HEIGHT, PagerButton, render_pager};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use table::{ActionButton, RenderedRow, button_label, render_records};
