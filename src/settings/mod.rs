//! Configuration loading and resolution.
//!
//! Files, environment variables and CLI flags are layered with the `config`
//! crate into a [`raw`] mirror, which is then validated into a
//! [`ResolvedConfig`]. [`load`] is the entry point.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
