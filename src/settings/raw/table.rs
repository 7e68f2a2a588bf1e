use serde::Deserialize;

use crate::cli::CliArgs;

/// `[table]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) title: Option<String>,
	pub(super) heading: Option<String>,
	pub(super) columns: Option<Vec<String>>,
	pub(super) pagination: Option<bool>,
	pub(super) rows_per_page: Option<usize>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(heading) = cli.heading.clone() {
			self.heading = Some(heading);
		}
		if let Some(columns) = &cli.columns {
			self.columns = Some(columns.clone());
		}
		if let Some(pagination) = cli.pagination {
			self.pagination = Some(pagination);
		}
		if let Some(rows) = cli.rows_per_page {
			self.rows_per_page = Some(rows);
		}
	}
}
