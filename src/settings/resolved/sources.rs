use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the values that validation can reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) rows_per_page: Option<SettingSource>,
	pub(crate) columns: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_rows_per_page(&self) -> SettingSource {
		self.rows_per_page
			.clone()
			.unwrap_or(SettingSource::ConfigKey("table.rows_per_page"))
	}

	pub(crate) fn source_for_columns(&self) -> SettingSource {
		self.columns
			.clone()
			.unwrap_or(SettingSource::ConfigKey("table.columns"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
