use std::borrow::Cow;

use serde_json::Value;

/// Identifier reported back to the host when a row action fires.
pub type RecordId = u64;

/// Capability required from every row displayed by the table.
///
/// Records stay owned by the host; the table only reads them through this
/// trait. Field lookups that return `None` render as an empty cell.
pub trait Record {
	/// Stable identifier for the record.
	fn id(&self) -> RecordId;

	/// Look up the display value for the column named `key`.
	fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<R: Record + ?Sized> Record for &R {
	fn id(&self) -> RecordId {
		(**self).id()
	}

	fn field(&self, key: &str) -> Option<Cow<'_, str>> {
		(**self).field(key)
	}
}

/// JSON objects act as records when they carry a numeric `id`.
///
/// Anything without one reports id `0`, which keeps malformed rows renderable.
impl Record for Value {
	fn id(&self) -> RecordId {
		self.get("id").and_then(Value::as_u64).unwrap_or_default()
	}

	fn field(&self, key: &str) -> Option<Cow<'_, str>> {
		match self.get(key)? {
			Value::Null => None,
			Value::String(text) => Some(Cow::Borrowed(text.as_str())),
			Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
			Value::Number(number) => Some(Cow::Owned(number.to_string())),
			nested @ (Value::Array(_) | Value::Object(_)) => Some(Cow::Owned(nested.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn json_object_exposes_id_and_fields() {
		let value = json!({ "id": 7, "name": "Ricardo", "age": 25, "admin": false });

		assert_eq!(value.id(), 7);
		assert_eq!(value.field("name").as_deref(), Some("Ricardo"));
		assert_eq!(value.field("age").as_deref(), Some("25"));
		assert_eq!(value.field("admin").as_deref(), Some("false"));
	}

	#[test]
	fn missing_and_null_fields_render_blank() {
		let value = json!({ "id": 1, "nickname": null });

		assert_eq!(value.field("nickname"), None);
		assert_eq!(value.field("email"), None);
	}

	#[test]
	fn nested_values_are_shown_as_compact_json() {
		let value = json!({ "id": 2, "tags": ["a", "b"] });
		assert_eq!(value.field("tags").as_deref(), Some(r#"["a","b"]"#));
	}

	#[test]
	fn values_without_numeric_id_fall_back_to_zero() {
		assert_eq!(json!({ "id": "x" }).id(), 0);
		assert_eq!(json!(42).id(), 0);
	}
}
