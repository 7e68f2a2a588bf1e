//! Records shown by the host: the built-in users or a JSON array file.

use std::fs;
use std::path::{Path, PathBuf};

use pagetable_core::{Record, RecordId};
use serde_json::Value;
use thiserror::Error;

use crate::users::{User, demo_users};

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read data file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("data file {path} is not valid JSON")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("data file {path} must contain a JSON array of records")]
	NotAnArray { path: PathBuf },
}

/// Records owned by the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
	Users(Vec<User>),
	Json(Vec<Value>),
}

impl Default for Dataset {
	fn default() -> Self {
		Self::demo()
	}
}

impl Dataset {
	/// The built-in demo users.
	pub fn demo() -> Self {
		Self::Users(demo_users())
	}

	/// Load a JSON array of objects from `path`.
	pub fn load(path: &Path) -> Result<Self, DatasetError> {
		let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&text, path)
	}

	/// Parse a JSON array; `origin` is only used in error messages.
	pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, DatasetError> {
		let value: Value = serde_json::from_str(text).map_err(|source| DatasetError::Parse {
			path: origin.to_path_buf(),
			source,
		})?;
		match value {
			Value::Array(records) => Ok(Self::Json(records)),
			_ => Err(DatasetError::NotAnArray {
				path: origin.to_path_buf(),
			}),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Users(users) => users.len(),
			Self::Json(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Borrow every record behind the common [`Record`] interface.
	pub fn records(&self) -> Vec<&dyn Record> {
		match self {
			Self::Users(users) => users.iter().map(|user| user as &dyn Record).collect(),
			Self::Json(values) => values.iter().map(|value| value as &dyn Record).collect(),
		}
	}

	/// Remove the record with `id`. Returns whether one was removed.
	pub fn remove(&mut self, id: RecordId) -> bool {
		let before = self.len();
		match self {
			Self::Users(users) => users.retain(|user| user.id != id),
			Self::Json(values) => values.retain(|value| value.id() != id),
		}
		self.len() != before
	}

	/// Short description used in the config summary and logs.
	pub fn describe(&self) -> String {
		match self {
			Self::Users(users) => format!("{} demo users", users.len()),
			Self::Json(values) => format!("{} JSON records", values.len()),
		}
	}
}
