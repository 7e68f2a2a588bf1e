use anyhow::{Context, Result, bail, ensure};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// One `themes/*.toml` file.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StyleTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleTable {
	title: StyleEntry,
	header: StyleEntry,
	border: StyleEntry,
	row_highlight: StyleEntry,
	button: StyleEntry,
	button_focus: StyleEntry,
	button_active: StyleEntry,
	button_disabled: StyleEntry,
	edit: StyleEntry,
	delete: StyleEntry,
	footer: StyleEntry,
	empty: StyleEntry,
}

/// `fg`/`bg` are `#rrggbb` or `reset`; modifiers are lowercase names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn style(&self, slot: &str) -> Result<Style> {
		let colour = |value: &Option<String>| value.as_deref().map(colour).transpose();
		let fg = colour(&self.fg).with_context(|| format!("styles.{slot}.fg"))?;
		let bg = colour(&self.bg).with_context(|| format!("styles.{slot}.bg"))?;
		let modifiers = self
			.modifiers
			.iter()
			.try_fold(Modifier::empty(), |acc, name| Ok::<_, anyhow::Error>(acc | modifier(name)?))
			.with_context(|| format!("styles.{slot}.modifiers"))?;

		let mut style = Style::new().add_modifier(modifiers);
		if let Some(fg) = fg {
			style = style.fg(fg);
		}
		if let Some(bg) = bg {
			style = style.bg(bg);
		}
		Ok(style)
	}
}

impl StyleTable {
	fn theme(&self) -> Result<Theme> {
		Ok(Theme {
			title: self.title.style("title")?,
			header: self.header.style("header")?,
			border: self.border.style("border")?,
			row_highlight: self.row_highlight.style("row_highlight")?,
			button: self.button.style("button")?,
			button_focus: self.button_focus.style("button_focus")?,
			button_active: self.button_active.style("button_active")?,
			button_disabled: self.button_disabled.style("button_disabled")?,
			edit: self.edit.style("edit")?,
			delete: self.delete.style("delete")?,
			footer: self.footer.style("footer")?,
			empty: self.empty.style("empty")?,
		})
	}
}

fn colour(value: &str) -> Result<Color> {
	if value == "reset" {
		return Ok(Color::Reset);
	}
	let Some(hex) = value.strip_prefix('#') else {
		bail!("expected `#rrggbb` or `reset`, found `{value}`");
	};
	ensure!(
		hex.len() == 6 && hex.bytes().all(|byte| byte.is_ascii_hexdigit()),
		"expected six hex digits, found `{value}`"
	);
	let channel = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&hex[range], 16).with_context(|| format!("`{value}` is not hex"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn modifier(name: &str) -> Result<Modifier> {
	Ok(match name {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underlined" => Modifier::UNDERLINED,
		"reversed" => Modifier::REVERSED,
		other => bail!("unknown modifier `{other}`"),
	})
}

fn read_theme(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path().display().to_string();
	let text = file
		.contents_utf8()
		.with_context(|| format!("{path} is not UTF-8"))?;
	let parsed: ThemeFile = toml::from_str(text).with_context(|| format!("cannot parse {path}"))?;
	let theme = parsed.styles.theme().with_context(|| format!("in {path}"))?;

	let registration = parsed
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(parsed.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, parsed.default))
}

/// Parse every bundled theme in file-name order.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by_key(|file| file.path());

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_name: Option<String> = None;
	for file in files {
		let (registration, is_default) = read_theme(file)?;
		if is_default {
			if let Some(previous) = &default_name {
				bail!(
					"both `{previous}` and `{}` are marked as the default theme",
					registration.name
				);
			}
			default_name = Some(registration.name.clone());
		}
		registrations.push(registration);
	}

	let default_theme = match &default_name {
		Some(name) => registrations.iter().find(|registration| &registration.name == name),
		None => registrations.first(),
	}
	.map(|registration| registration.theme)
	.context("no bundled themes found")?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}
