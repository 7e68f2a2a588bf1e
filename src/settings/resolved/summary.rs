use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let options = &config.options;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Heading: {}", config.heading),
		format!("  Table title: {}", options.title),
		format!("  Columns: {}", options.columns.keys().join(", ")),
		format!("  Pagination: {}", bool_to_word(options.pagination)),
		format!("  Rows per page: {}", options.rows_per_page),
		format!("  UI theme: {}", config.theme_name),
	];
	match &config.data_path {
		Some(path) => lines.push(format!("  Data: {}", path.display())),
		None => lines.push("  Data: (built-in users)".to_string()),
	}
	lines.push(format!(
		"  Apply deletes: {}",
		bool_to_word(config.apply_deletes)
	));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use pagetable_core::TableOptions;
	use pagetable_tui::Theme;

	use super::*;

	#[test]
	fn summary_names_every_setting() {
		let config = ResolvedConfig {
			heading: "Pruebas".into(),
			options: TableOptions::new()
				.with_title("usuarios")
				.with_columns(["name", "age"]),
			theme_name: "slate".into(),
			theme: Theme::default(),
			data_path: None,
			apply_deletes: false,
		};

		insta::assert_snapshot!(summary_lines(&config).join("\n"), @r"
		Effective configuration:
		  Heading: Pruebas
		  Table title: usuarios
		  Columns: name, age
		  Pagination: yes
		  Rows per page: 5
		  UI theme: slate
		  Data: (built-in users)
		  Apply deletes: no
		");
	}
}
