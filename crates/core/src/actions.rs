//! Row actions are reported to the host as intents; the table never mutates
//! the records it shows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// Action offered for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
	Edit,
	Delete,
}

impl RowAction {
	/// Both actions in button order.
	pub const ALL: [Self; 2] = [Self::Edit, Self::Delete];

	/// Button label.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Edit => "Edit",
			Self::Delete => "Delete",
		}
	}

	/// The other button, used for focus cycling.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Edit => Self::Delete,
			Self::Delete => Self::Edit,
		}
	}
}

impl fmt::Display for RowAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Edit => f.write_str("edit"),
			Self::Delete => f.write_str("delete"),
		}
	}
}

/// An action requested for the record with `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowIntent {
	pub action: RowAction,
	pub id: RecordId,
}

impl RowIntent {
	#[must_use]
	pub fn edit(id: RecordId) -> Self {
		Self {
			action: RowAction::Edit,
			id,
		}
	}

	#[must_use]
	pub fn delete(id: RecordId) -> Self {
		Self {
			action: RowAction::Delete,
			id,
		}
	}
}

impl fmt::Display for RowIntent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.action, self.id)
	}
}

/// Receiver of row intents, implemented by whoever owns the records.
pub trait RowActions {
	fn on_edit(&mut self, id: RecordId);

	fn on_delete(&mut self, id: RecordId);

	/// Route an intent to the matching callback.
	fn dispatch(&mut self, intent: RowIntent) {
		match intent.action {
			RowAction::Edit => self.on_edit(intent.id),
			RowAction::Delete => self.on_delete(intent.id),
		}
	}
}

/// [`RowActions`] backed by a pair of closures.
pub struct ActionCallbacks<E, D> {
	on_edit: E,
	on_delete: D,
}

impl<E, D> ActionCallbacks<E, D>
where
	E: FnMut(RecordId),
	D: FnMut(RecordId),
{
	pub fn new(on_edit: E, on_delete: D) -> Self {
		Self { on_edit, on_delete }
	}
}

impl<E, D> RowActions for ActionCallbacks<E, D>
where
	E: FnMut(RecordId),
	D: FnMut(RecordId),
{
	fn on_edit(&mut self, id: RecordId) {
		(self.on_edit)(id);
	}

	fn on_delete(&mut self, id: RecordId) {
		(self.on_delete)(id);
	}
}

impl<A: RowActions + ?Sized> RowActions for &mut A {
	fn on_edit(&mut self, id: RecordId) {
		(**self).on_edit(id);
	}

	fn on_delete(&mut self, id: RecordId) {
		(**self).on_delete(id);
	}
}
