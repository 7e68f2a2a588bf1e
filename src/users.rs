//! Built-in demo records.

use std::borrow::Cow;

use pagetable_core::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: RecordId,
	pub name: String,
	pub age: u32,
}

impl User {
	pub fn new(id: RecordId, name: impl Into<String>, age: u32) -> Self {
		Self {
			id,
			name: name.into(),
			age,
		}
	}
}

impl Record for User {
	fn id(&self) -> RecordId {
		self.id
	}

	fn field(&self, key: &str) -> Option<Cow<'_, str>> {
		match key {
			"id" => Some(Cow::Owned(self.id.to_string())),
			"name" => Some(Cow::Borrowed(self.name.as_str())),
			"age" => Some(Cow::Owned(self.age.to_string())),
			_ => None,
		}
	}
}

const DEMO_NAMES: [&str; 10] = [
	"Juan", "Pedro", "Luis", "Carlos", "Jose", "Jorge", "Ricardo", "Miguel", "Javier", "Cristian",
];
const DEMO_AGE: u32 = 25;

/// The ten fixed records shown when no data file is given.
pub fn demo_users() -> Vec<User> {
	DEMO_NAMES
		.iter()
		.zip(1..)
		.map(|(name, id)| User::new(id, *name, DEMO_AGE))
		.collect()
}
