//! Host application around the paginated record table.
//!
//! The widget itself lives in `pagetable-core` (model) and `pagetable-tui`
//! (rendering); this crate supplies the records, the page that reacts to row
//! actions, and the terminal plumbing used by the `pagetable` binary.

pub mod app_dirs;
pub mod dataset;
pub mod host;
pub mod logging;
pub mod users;

pub use dataset::{Dataset, DatasetError};
pub use host::{ActionLog, DEFAULT_HEADING, HostConfig, HostControl, HostPage, run};
pub use pagetable_core as core;
pub use pagetable_tui as tui;
pub use users::{User, demo_users};
