//! Recorded actuations.
//!
//! Actuating a gear is the only move the puzzle has, so a move is fully
//! described by the gear that was actuated. `Rotation` adds a sequence
//! number for ordering within a session's history.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// One successful actuation, as kept in a session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation {
    /// The actuated gear (center of the rotated ring).
    pub center: Position,

    /// 0-based index of this move within the session.
    pub sequence: u64,
}

impl Rotation {
    /// Create a new rotation record.
    #[must_use]
    pub fn new(center: Position, sequence: u64) -> Self {
        Self { center, sequence }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} rotate {}", self.sequence, self.center)
    }
}
