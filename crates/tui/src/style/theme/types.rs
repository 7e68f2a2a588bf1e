use ratatui::style::Style;

/// Styles applied to the parts of the paged table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Heading above the table.
	pub title: Style,
	/// Column header row and the separator below it.
	pub header: Style,
	/// Table border.
	pub border: Style,
	/// Selected row.
	pub row_highlight: Style,
	/// Enabled page controls.
	pub button: Style,
	/// Row action button that has keyboard focus on the selected row.
	pub button_focus: Style,
	/// Page control of the current page.
	pub button_active: Style,
	/// Controls that cannot be used right now.
	pub button_disabled: Style,
	/// `Edit` row action.
	pub edit: Style,
	/// `Delete` row action.
	pub delete: Style,
	/// Footer summary line.
	pub footer: Style,
	/// Placeholder shown when there are no records.
	pub empty: Style,
}

impl Theme {
	/// Style of the separator line drawn under the header row.
	#[must_use]
	pub fn separator_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or_default())
			.bg(self.header.bg.unwrap_or_default())
	}
}

/// A named theme together with the aliases it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	#[must_use]
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}
