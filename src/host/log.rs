use pagetable_core::RowIntent;
use serde::Serialize;

/// Every row action the host received, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionLog {
	entries: Vec<RowIntent>,
}

impl ActionLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, intent: RowIntent) {
		self.entries.push(intent);
	}

	pub fn entries(&self) -> &[RowIntent] {
		&self.entries
	}

	pub fn last(&self) -> Option<&RowIntent> {
		self.entries.last()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &RowIntent> {
		self.entries.iter()
	}
}
