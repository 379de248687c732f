//! Puzzle sessions: move history, undo and scrambling on top of a mesh.

mod session;

pub use session::{Puzzle, SCRAMBLE_CONTEXT};
