use std::num::NonZeroUsize;

use pagetable_core::Columns;
use pagetable_tui::Theme;

use super::{ConfigError, SettingSource};

pub(crate) fn rows_per_page(
	value: usize,
	origin: SettingSource,
) -> Result<NonZeroUsize, ConfigError> {
	NonZeroUsize::new(value).ok_or_else(|| {
		ConfigError::invalid(
			"table.rows_per_page",
			value.to_string(),
			origin,
			"must be greater than zero",
		)
	})
}

/// Trim column keys and drop blank ones; at least one must remain.
pub(crate) fn columns(values: Vec<String>, origin: SettingSource) -> Result<Columns, ConfigError> {
	let raw = values.join(",");
	let columns: Columns = values
		.into_iter()
		.map(|key| key.trim().to_string())
		.filter(|key| !key.is_empty())
		.collect();
	if columns.is_empty() {
		return Err(ConfigError::invalid(
			"table.columns",
			raw,
			origin,
			"must name at least one column",
		));
	}
	Ok(columns)
}

pub(crate) fn theme(name: &str, origin: SettingSource) -> Result<Theme, ConfigError> {
	pagetable_tui::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			origin,
			format!(
				"unknown theme, expected one of: {}",
				pagetable_tui::names().join(", ")
			),
		)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_rejects_zero_rows_per_page() {
		let err = rows_per_page(0, SettingSource::CliFlag("--rows-per-page")).unwrap_err();
		assert_eq!(err.key, "table.rows_per_page");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn columns_are_trimmed() {
		let columns = columns(
			vec![" name ".into(), String::new(), "age".into()],
			SettingSource::ConfigKey("table.columns"),
		)
		.expect("valid columns");
		assert_eq!(columns.keys(), ["name", "age"]);
	}

	#[test]
	fn blank_columns_are_rejected() {
		let err = columns(
			vec![" ".into()],
			SettingSource::Environment("PAGETABLE__TABLE__COLUMNS".into()),
		)
		.unwrap_err();
		assert_eq!(err.key, "table.columns");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn theme_names_resolve_through_aliases() {
		let origin = SettingSource::ConfigKey("ui.theme");
		assert!(theme("Plain", origin.clone()).is_ok());
		let err = theme("neon", origin).unwrap_err();
		assert!(err.reason.contains("slate"));
	}
}
