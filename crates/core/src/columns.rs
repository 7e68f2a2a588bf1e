use serde::{Deserialize, Serialize};

/// Ordered list of record field keys shown by the table, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(Vec<String>);

impl Columns {
	/// Build a column list from any sequence of keys.
	pub fn new<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(keys.into_iter().map(Into::into).collect())
	}

	/// Column keys in display order.
	#[must_use]
	pub fn keys(&self) -> &[String] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Header labels derived from the keys, in display order.
	pub fn headers(&self) -> impl Iterator<Item = String> + '_ {
		self.0.iter().map(|key| header_label(key))
	}
}

impl<S: Into<String>> FromIterator<S> for Columns {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}

impl From<Vec<String>> for Columns {
	fn from(keys: Vec<String>) -> Self {
		Self::new(keys)
	}
}

impl<const N: usize> From<[&str; N]> for Columns {
	fn from(keys: [&str; N]) -> Self {
		Self::new(keys)
	}
}

/// Header label for a column key: the key with its first character uppercased.
#[must_use]
pub fn header_label(key: &str) -> String {
	let mut chars = key.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
