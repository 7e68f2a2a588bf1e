use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pagetable` binary.
#[derive(Parser, Debug)]
#[command(
	name = "pagetable",
	version,
	long_version = long_version(),
	about = "Browse records in a paginated terminal table with edit and delete actions",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PAGETABLE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title shown above the table (default: usuarios)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the page heading (default: Pruebas)"
	)]
	pub(crate) heading: Option<String>,
	#[arg(
		long,
		value_delimiter = ',',
		value_name = "KEY",
		help = "Comma-separated record fields to show as columns (default: name,age)"
	)]
	pub(crate) columns: Option<Vec<String>>,
	#[arg(
		short = 'r',
		long = "rows-per-page",
		value_name = "NUM",
		help = "Number of rows on each page (default: 7)"
	)]
	pub(crate) rows_per_page: Option<usize>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Split the records into pages (default: enabled)"
	)]
	pub(crate) pagination: Option<bool>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'd',
		long,
		value_name = "FILE",
		help = "Load records from a JSON array file (default: built-in users)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long = "apply-deletes",
		value_parser = BoolishValueParser::new(),
		help = "Remove records when Delete is activated (default: disabled)"
	)]
	pub(crate) apply_deletes: Option<bool>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: pagetable.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the action log"
	)]
	pub(crate) output: OutputFormat,
}
