//! Ring geometry of the packed-circle lattice.
//!
//! Around a gear at `(i, j)` the six touching gears sit at fixed offsets.
//! Listed from the lower-left neighbour (row index growing upward) and
//! proceeding clockwise:
//!
//! ```text
//! (i-2, j-1), (i, j-2), (i+2, j-1), (i+2, j+1), (i, j+2), (i-2, j+1)
//! ```
//!
//! With row 0 drawn at the top instead, the same sequence starts upper-left
//! and reads counter-clockwise on screen. The order itself never changes.

use smallvec::SmallVec;

use crate::core::Position;

/// Number of gears in a complete ring.
pub const RING_SIZE: usize = 6;

/// `(d_row, d_col)` offsets of the ring, in rotation order.
pub const RING_OFFSETS: [(i32, i32); RING_SIZE] = [
    (-2, -1),
    (0, -2),
    (2, -1),
    (2, 1),
    (0, 2),
    (-2, 1),
];

/// Valid neighbours of a gear, in rotation order.
///
/// Slots whose candidate is not a gear are omitted, not renumbered, so only
/// a ring with all `RING_SIZE` members can be rotated.
pub type Ring = SmallVec<[Position; RING_SIZE]>;

/// All six candidate positions around `center`, in rotation order.
#[must_use]
pub fn candidates(center: Position) -> [Position; RING_SIZE] {
    RING_OFFSETS.map(|(d_row, d_col)| center.offset(d_row, d_col))
}
