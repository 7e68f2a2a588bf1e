mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use pagetable::{ActionLog, Dataset, HostPage, logging};
use settings::ResolvedConfig;
use tracing::{info, warn};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for theme in pagetable::tui::style::descriptors() {
			if theme.aliases.is_empty() {
				println!("{}", theme.name);
			} else {
				println!("{} ({})", theme.name, theme.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize(cli.log_file.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	let log = run_table(resolved)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&log),
		OutputFormat::Json => print_json(&log)?,
	}

	Ok(())
}

/// Load the records and run the table page until the user quits.
fn run_table(settings: ResolvedConfig) -> Result<ActionLog> {
	let dataset = match &settings.data_path {
		Some(path) => Dataset::load(path)
			.inspect_err(|err| warn!(error = %err, "failed to load data file"))
			.with_context(|| format!("cannot show records from {}", path.display()))?,
		None => Dataset::demo(),
	};
	info!(records = %dataset.describe(), "starting table");

	let page = HostPage::new(settings.host_config(), dataset);
	pagetable::run(page)
}
