//! Terminal rendering of the paginated record table.
//!
//! [`PagedTableState`] owns the table model and the interaction state (row
//! selection, focused action button, clickable regions from the last frame).
//! Callers draw it with [`PagedTableState::render`] and feed it terminal
//! events; row actions come back as [`TableEvent::Intent`] for the host to
//! dispatch.

pub mod components;
mod input;
mod render;
mod state;
pub mod style;


pub use pagetable_core as core;
pub use state::{HitTarget, PagedTableState, TableEvent};
pub use style::{Theme, by_name, default_theme, names};
