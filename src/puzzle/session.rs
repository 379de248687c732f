//! Play session over a gear mesh.
//!
//! A `Puzzle` owns a `GearMesh` plus everything needed to play it:
//! - Move history (persistent `im` vector, O(1) clone)
//! - Undo of the most recent move
//! - Seeded scrambling from its own RNG stream
//! - Checkpoint and resume (`rng_state` + `restore`)

use im::Vector;
use log::debug;

use crate::core::{MeshRng, MeshRngState, Position, Result, Rotation};
use crate::mesh::{GearMesh, RING_SIZE};

/// RNG stream used to pick scramble moves.
pub const SCRAMBLE_CONTEXT: &str = "scramble";

/// A gear mesh being played, with its move history.
#[derive(Clone, Debug)]
pub struct Puzzle {
    mesh: GearMesh,

    /// Successful actuations, oldest first.
    history: Vector<Rotation>,

    /// Scramble RNG.
    rng: MeshRng,

    /// Sequence number for the next recorded move.
    next_sequence: u64,
}

impl Puzzle {
    /// Start a session on `mesh`, scrambling from `seed`.
    #[must_use]
    pub fn new(mesh: GearMesh, seed: u64) -> Self {
        Self {
            mesh,
            history: Vector::new(),
            rng: MeshRng::new(seed).for_context(SCRAMBLE_CONTEXT),
            next_sequence: 0,
        }
    }

    /// Resume a session from a checkpoint.
    ///
    /// `mesh` and `history` are the session's mesh and history at the time
    /// `rng_state` was taken. Scrambling continues with the same moves the
    /// original session would have made; sequence numbers continue after
    /// the last recorded move.
    #[must_use]
    pub fn restore(mesh: GearMesh, history: Vector<Rotation>, rng_state: &MeshRngState) -> Self {
        let next_sequence = history.last().map_or(0, |r| r.sequence + 1);
        Self {
            mesh,
            history,
            rng: MeshRng::from_state(rng_state),
            next_sequence,
        }
    }

    /// The current mesh.
    #[must_use]
    pub fn mesh(&self) -> &GearMesh {
        &self.mesh
    }

    /// End the session, keeping the mesh.
    #[must_use]
    pub fn into_mesh(self) -> GearMesh {
        self.mesh
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Rotation> {
        &self.history
    }

    /// Number of moves currently in the history.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Snapshot of the scramble RNG, for `Puzzle::restore`.
    #[must_use]
    pub fn rng_state(&self) -> MeshRngState {
        self.rng.state()
    }

    /// Actuate the gear at `pos`.
    ///
    /// Returns the result of `GearMesh::rotate`. Only moves that rotated
    /// a ring are recorded.
    pub fn actuate(&mut self, pos: Position) -> Result<bool> {
        let rotated = self.mesh.rotate(pos)?;
        if rotated {
            self.history.push_back(Rotation::new(pos, self.next_sequence));
            self.next_sequence += 1;
        }
        Ok(rotated)
    }

    /// Undo the most recent move.
    ///
    /// Turns the same ring the remaining `RING_SIZE - 1` steps, which
    /// brings every neighbour back to its previous color. Returns the
    /// undone move, or `None` if the history is empty.
    pub fn undo(&mut self) -> Result<Option<Rotation>> {
        let Some(last) = self.history.pop_back() else {
            return Ok(None);
        };

        for _ in 1..RING_SIZE {
            self.mesh.rotate(last.center)?;
        }

        debug!("undid {}", last);
        Ok(Some(last))
    }

    /// Apply `moves` random actuations.
    ///
    /// Each move picks uniformly among gears with a complete ring. Returns
    /// the number of moves applied, which is 0 when no gear can rotate.
    pub fn scramble(&mut self, moves: usize) -> Result<usize> {
        let candidates = self.mesh.actuatable();
        if candidates.is_empty() {
            debug!("scramble skipped: no gear has a complete ring");
            return Ok(0);
        }

        for _ in 0..moves {
            if let Some(&pos) = self.rng.choose(&candidates) {
                self.actuate(pos)?;
            }
        }

        debug!("scrambled with {} moves", moves);
        Ok(moves)
    }
}
