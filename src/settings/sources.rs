use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use pagetable::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment variables such as `PAGETABLE__TABLE__ROWS_PER_PAGE`.
pub(super) const ENV_PREFIX: &str = "PAGETABLE";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment, in increasing priority.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("table.columns"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Configuration files consulted unless `--no-config` is given.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pagetable.toml"));
		files.push(current_dir.join("pagetable.toml"));
	}

	files
}

/// Environment variable that sets the configuration key `section.key`.
pub(super) fn env_var_for(key: &str) -> String {
	let path = key.split('.').map(str::to_ascii_uppercase).collect::<Vec<_>>();
	format!("{ENV_PREFIX}{ENV_SEPARATOR}{}", path.join(ENV_SEPARATOR))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".pagetable.toml")));
		assert!(files.iter().any(|path| path.ends_with("pagetable.toml")));
	}

	#[test]
	fn env_var_names_follow_the_section_layout() {
		assert_eq!(
			env_var_for("table.rows_per_page"),
			"PAGETABLE__TABLE__ROWS_PER_PAGE"
		);
		assert_eq!(env_var_for("ui.theme"), "PAGETABLE__UI__THEME");
	}
}
