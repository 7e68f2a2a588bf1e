use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeDescriptor, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
	aliases: Vec<String>,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			mut aliases,
		} = registration;
		let normalized = normalize_name(&name);

		aliases.retain(|alias| {
			let alias_normalized = normalize_name(alias);
			if alias_normalized == normalized || self.aliases.contains_key(&alias_normalized) {
				return false;
			}
			self.aliases.insert(alias_normalized, normalized.clone());
			true
		});
		aliases.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

		self.canonical.insert(
			normalized,
			ThemeEntry {
				display_name: name,
				theme,
				aliases,
			},
		);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for registration in builtins::registrations() {
			registry.register(registration);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Return the canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<_> = registry()
		.canonical
		.values()
		.map(|entry| entry.display_name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

/// Produce detailed descriptors for every known theme.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	registry()
		.canonical
		.values()
		.map(|entry| ThemeDescriptor {
			name: entry.display_name.clone(),
			aliases: entry.aliases.clone(),
			theme: entry.theme,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_are_registered() {
		assert_eq!(names(), vec!["light", "mono", "slate"]);
		assert!(by_name("slate").is_some());
	}

	#[test]
	fn lookups_ignore_case_and_resolve_aliases() {
		assert_eq!(by_name("DEFAULT"), by_name("slate"));
		assert_eq!(by_name(" plain "), by_name("mono"));
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn descriptors_list_sorted_aliases() {
		let slate = descriptors()
			.into_iter()
			.find(|descriptor| descriptor.name == "slate")
			.expect("slate registered");
		assert_eq!(slate.aliases, vec!["dark", "default"]);
	}
}
