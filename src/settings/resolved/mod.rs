use std::path::PathBuf;

use pagetable::HostConfig;
use pagetable_core::TableOptions;
use pagetable_tui::Theme;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub heading: String,
	pub options: TableOptions,
	/// Theme name as the user wrote it.
	pub theme_name: String,
	pub theme: Theme,
	pub data_path: Option<PathBuf>,
	pub apply_deletes: bool,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			println!("{line}");
		}
	}

	/// Settings for the host page.
	pub fn host_config(&self) -> HostConfig {
		HostConfig {
			heading: self.heading.clone(),
			options: self.options.clone(),
			theme: self.theme,
			apply_deletes: self.apply_deletes,
		}
	}
}
