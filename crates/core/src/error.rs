use thiserror::Error;

/// Errors raised while configuring a table.
///
/// Rendering itself never fails: malformed records degrade to blank cells.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
	#[error("rows per page must be greater than zero")]
	ZeroRowsPerPage,
}
