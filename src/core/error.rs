//! Error types for mesh construction and queries.
//!
//! All variants signal caller error. An incomplete ring on `rotate` is not
//! an error; it is reported as a `false` return.

use thiserror::Error;

use super::position::Position;

/// Errors raised by mesh operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A construction parameter is invalid (too many pre-colored gears,
    /// empty or ragged layout).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A queried position lies outside the grid.
    #[error("Position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// An operation that requires a gear center was given another cell.
    #[error("Position {0} is not a gear")]
    NotAGear(Position),
}

impl MeshError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MeshError::InvalidArgument(message.into())
    }
}

/// Result alias for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
