use std::env;
use std::num::NonZeroUsize;

use anyhow::{Error, Result};
use pagetable::DEFAULT_HEADING;
use pagetable_core::TableOptions;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, validation};
use super::sources::env_var_for;
use crate::cli::CliArgs;

mod host;
mod table;

use host::{ActionsSection, DataSection, UiSection};
use table::TableSection;

pub(super) const DEFAULT_TITLE: &str = "usuarios";
pub(super) const DEFAULT_COLUMNS: [&str; 2] = ["name", "age"];
pub(super) const DEFAULT_ROWS: NonZeroUsize = match NonZeroUsize::new(7) {
	Some(rows) => rows,
	None => unreachable!(),
};
pub(super) const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	ui: UiSection,
	data: DataSection,
	actions: ActionsSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.table.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.data.apply_cli_overrides(cli);
		self.actions.apply_cli_overrides(cli);
	}

	/// Validate the raw values and fill in defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			rows_per_page: detect_source(
				cli.rows_per_page.is_some(),
				self.table.rows_per_page.is_some(),
				"--rows-per-page",
				"table.rows_per_page",
			),
			columns: detect_source(
				cli.columns.is_some(),
				self.table.columns.is_some(),
				"--columns",
				"table.columns",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"--theme",
				"ui.theme",
			),
		};

		let rows_per_page = match self.table.rows_per_page {
			Some(rows) => validation::rows_per_page(rows, sources.source_for_rows_per_page())
				.map_err(Error::new)?,
			None => DEFAULT_ROWS,
		};
		let columns = match self.table.columns {
			Some(columns) => {
				validation::columns(columns, sources.source_for_columns()).map_err(Error::new)?
			}
			None => DEFAULT_COLUMNS.into(),
		};
		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = validation::theme(&theme_name, sources.source_for_theme()).map_err(Error::new)?;

		let options = TableOptions {
			title: self.table.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			columns,
			pagination: self.table.pagination.unwrap_or(true),
			rows_per_page,
		};

		Ok(ResolvedConfig {
			heading: self
				.table
				.heading
				.unwrap_or_else(|| DEFAULT_HEADING.to_string()),
			options,
			theme_name,
			theme,
			data_path: self.data.path,
			apply_deletes: self.actions.apply_deletes.unwrap_or(false),
		})
	}
}

/// Work out where a value came from so errors can point at it.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
