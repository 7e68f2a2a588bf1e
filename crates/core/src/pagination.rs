//! Client-side pagination arithmetic.
//!
//! Pages are 1-based. A dataset of `n` records split into pages of
//! `rows_per_page` has `ceil(n / rows_per_page)` pages, which is zero for an
//! empty dataset; the current page still stays at 1 in that case.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of pages needed to show `record_count` records.
#[must_use]
pub fn total_pages(record_count: usize, rows_per_page: NonZeroUsize) -> usize {
	record_count.div_ceil(rows_per_page.get())
}

/// Index range of the records shown on `page`, clipped to the dataset.
///
/// Pages past the end of the data yield an empty range at `record_count`.
#[must_use]
pub fn page_range(record_count: usize, page: usize, rows_per_page: NonZeroUsize) -> Range<usize> {
	let start = page
		.saturating_sub(1)
		.saturating_mul(rows_per_page.get())
		.min(record_count);
	let end = start.saturating_add(rows_per_page.get()).min(record_count);
	start..end
}

/// Visible slice of `data` for `current_page`, preserving source order.
#[must_use]
pub fn derive_visible_slice<T>(data: &[T], current_page: usize, rows_per_page: NonZeroUsize) -> &[T] {
	&data[page_range(data.len(), current_page, rows_per_page)]
}

/// Result of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
	/// The current page changed to the requested value.
	Moved,
	/// The request left the current page where it was.
	Unchanged,
	/// The requested page was out of range and was clamped into it.
	Clamped,
}

/// Pagination state owned by a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	current_page: usize,
	rows_per_page: NonZeroUsize,
}

impl Pagination {
	/// Start on the first page.
	#[must_use]
	pub fn new(rows_per_page: NonZeroUsize) -> Self {
		Self {
			current_page: 1,
			rows_per_page,
		}
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	#[must_use]
	pub fn rows_per_page(&self) -> NonZeroUsize {
		self.rows_per_page
	}

	/// Change the page size and keep the current page in range.
	pub fn set_rows_per_page(&mut self, rows_per_page: NonZeroUsize, record_count: usize) {
		self.rows_per_page = rows_per_page;
		self.revalidate(record_count);
	}

	#[must_use]
	pub fn total_pages(&self, record_count: usize) -> usize {
		total_pages(record_count, self.rows_per_page)
	}

	/// Highest page the state may point at; at least 1 even when empty.
	#[must_use]
	pub fn last_page_index(&self, record_count: usize) -> usize {
		self.total_pages(record_count).max(1)
	}

	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	#[must_use]
	pub fn has_next(&self, record_count: usize) -> bool {
		self.current_page < self.total_pages(record_count)
	}

	/// Index range of the records on the current page.
	#[must_use]
	pub fn range(&self, record_count: usize) -> Range<usize> {
		page_range(record_count, self.current_page, self.rows_per_page)
	}

	/// Visible slice of `data` for the current page.
	#[must_use]
	pub fn visible<'a, T>(&self, data: &'a [T]) -> &'a [T] {
		derive_visible_slice(data, self.current_page, self.rows_per_page)
	}

	/// Step back one page; a no-op on the first page.
	pub fn previous_page(&mut self) -> PageChange {
		if self.has_previous() {
			self.current_page -= 1;
			PageChange::Moved
		} else {
			PageChange::Unchanged
		}
	}

	/// Step forward one page; a no-op on the last page.
	pub fn next_page(&mut self, record_count: usize) -> PageChange {
		if self.has_next(record_count) {
			self.current_page += 1;
			PageChange::Moved
		} else {
			PageChange::Unchanged
		}
	}

	/// Jump to `page`, clamping requests outside `[1, total_pages]`.
	pub fn go_to_page(&mut self, page: usize, record_count: usize) -> PageChange {
		let last = self.last_page_index(record_count);
		let target = page.clamp(1, last);
		let change = if target != page {
			PageChange::Clamped
		} else if target == self.current_page {
			PageChange::Unchanged
		} else {
			PageChange::Moved
		};
		self.current_page = target;
		change
	}

	pub fn first_page(&mut self) -> PageChange {
		if self.current_page == 1 {
			return PageChange::Unchanged;
		}
		self.current_page = 1;
		PageChange::Moved
	}

	pub fn last_page(&mut self, record_count: usize) -> PageChange {
		let last = self.last_page_index(record_count);
		self.go_to_page(last, record_count)
	}

	/// Pull the current page back into range after the dataset changed.
	///
	/// Returns `true` when the page had to move.
	pub fn revalidate(&mut self, record_count: usize) -> bool {
		let last = self.last_page_index(record_count);
		if self.current_page > last {
			self.current_page = last;
			true
		} else {
			false
		}
	}
}
