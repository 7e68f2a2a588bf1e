//! Visual styling for the table widget.
//!
//! Themes are loaded from TOML definitions bundled with the crate and looked
//! up by case-insensitive name or alias.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, ThemeRegistration, by_name, default_theme, descriptors, names};
