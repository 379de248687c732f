//! The gear mesh: grid state, gear positions and the rotate transition.
//!
//! ## Invariants
//!
//! - The gear-position set is computed once at construction and never
//!   changes. Gears never appear or disappear.
//! - A cell is `Cell::Gear` iff its position is in the gear-position set.
//!   Rotation only permutes colors among gear cells.
//!
//! ## Rotation
//!
//! Actuating a gear whose ring is complete moves each neighbour's color one
//! slot forward around the ring: ring colors `c0..c5` become
//! `c5, c0, c1, c2, c3, c4`. The actuated gear keeps its own color.
//! Edge gears with fewer than six neighbours cannot be actuated; `rotate`
//! returns `false` and leaves the grid untouched.
//!
//! Ring order is clockwise with row index growing upward, the convention the
//! renderers draw in; see `mesh::ring` for how it reads with row 0 on top.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Cell, Color, Layout, MeshError, MeshRng, Position, Result};

use super::ring::{candidates, Ring, RING_SIZE};

/// Mesh of interlocking gears on a square grid.
///
/// Uses an `im` vector for the cells, so cloning a mesh (e.g. to keep a
/// snapshot before a sequence of moves) is O(1).
#[derive(Clone, Debug)]
pub struct GearMesh {
    rows: usize,
    cols: usize,

    /// Row-major cell contents.
    cells: Vector<Cell>,

    /// Gear positions in row-major order.
    positions: Vec<Position>,

    /// Same positions, for membership checks.
    gears: FxHashSet<Position>,
}

impl GearMesh {
    /// Build a mesh from a layout, keeping the layout's colors.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let (rows, cols, cells) = layout.into_parts();

        let positions: Vec<Position> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_gear())
            .map(|(i, _)| Position::from_index(i, cols))
            .collect();
        let gears = positions.iter().copied().collect();

        debug!(
            "built {}x{} gear mesh with {} gears",
            rows,
            cols,
            positions.len()
        );

        Self {
            rows,
            cols,
            cells: cells.into_iter().collect(),
            positions,
            gears,
        }
    }

    /// Build a mesh and paint `count` gears with `color`.
    ///
    /// The painted gears are drawn uniformly without replacement from all
    /// gear positions using `rng`. Fails with `InvalidArgument` if `count`
    /// exceeds the number of gears.
    pub fn with_colored(
        layout: Layout,
        count: usize,
        color: Color,
        rng: &mut MeshRng,
    ) -> Result<Self> {
        let total = layout.gear_count();
        if count > total {
            return Err(MeshError::invalid_argument(format!(
                "cannot pre-color {} gears, layout has only {}",
                count, total
            )));
        }

        let mut mesh = Self::new(layout);
        for i in rng.sample_indices(total, count) {
            let index = mesh.index_of(mesh.positions[i]);
            mesh.cells[index] = Cell::Gear(color.clone());
        }

        debug!("pre-colored {} of {} gears with {}", count, total, color);
        Ok(mesh)
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of gears.
    #[must_use]
    pub fn gear_count(&self) -> usize {
        self.positions.len()
    }

    /// All gear positions in row-major order.
    ///
    /// The order is fixed for the lifetime of the mesh.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Whether `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.index_in(self.rows, self.cols).is_some()
    }

    /// Whether a gear is centered at `pos`.
    #[must_use]
    pub fn is_gear(&self, pos: Position) -> bool {
        self.gears.contains(&pos)
    }

    /// Current contents of the cell at `pos`.
    ///
    /// Returns `Cell::Empty` for non-gear cells; fails with `OutOfBounds`
    /// outside the grid.
    pub fn color_at(&self, pos: Position) -> Result<&Cell> {
        pos.index_in(self.rows, self.cols)
            .map(|i| &self.cells[i])
            .ok_or(MeshError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// `(position, color)` for every gear, in `positions()` order.
    pub fn colors(&self) -> impl Iterator<Item = (Position, &Color)> + '_ {
        self.positions
            .iter()
            .filter_map(move |&pos| self.cells[self.index_of(pos)].color().map(|c| (pos, c)))
    }

    /// Valid neighbours of the gear at `pos`, in rotation order.
    ///
    /// Fails with `NotAGear` if `pos` is not a gear position (including
    /// positions outside the grid).
    pub fn neighbors_of(&self, pos: Position) -> Result<Ring> {
        self.require_gear(pos)?;
        Ok(self.ring(pos))
    }

    /// Colors around the gear at `pos`, in rotation order.
    pub fn ring_colors(&self, pos: Position) -> Result<SmallVec<[&Color; RING_SIZE]>> {
        let ring = self.neighbors_of(pos)?;
        Ok(ring
            .iter()
            .filter_map(|&p| self.cells[self.index_of(p)].color())
            .collect())
    }

    /// Gears with a complete ring, in `positions()` order.
    #[must_use]
    pub fn actuatable(&self) -> Vec<Position> {
        self.positions
            .iter()
            .copied()
            .filter(|&pos| self.ring(pos).len() == RING_SIZE)
            .collect()
    }

    /// Actuate the gear at `pos`.
    ///
    /// If its ring is complete, shifts the six neighbour colors one slot
    /// forward around the ring and returns `true`. Otherwise nothing
    /// changes and `false` is returned. Fails with `NotAGear` if `pos` is
    /// not a gear position.
    pub fn rotate(&mut self, pos: Position) -> Result<bool> {
        let ring = self.neighbors_of(pos)?;
        if ring.len() != RING_SIZE {
            trace!("gear {} has {} of {} neighbours, not rotating", pos, ring.len(), RING_SIZE);
            return Ok(false);
        }

        // Walking back from the last slot, each swap carries the last color
        // one slot toward the front; everything else moves one slot forward.
        let indices: SmallVec<[usize; RING_SIZE]> = ring.iter().map(|&p| self.index_of(p)).collect();
        for k in (1..RING_SIZE).rev() {
            self.cells.swap(indices[k - 1], indices[k]);
        }

        debug!("rotated ring around gear {}", pos);
        Ok(true)
    }

    // === Internals ===

    /// Ring of a known gear, filtered to gear positions.
    fn ring(&self, pos: Position) -> Ring {
        candidates(pos)
            .into_iter()
            .filter(|p| self.gears.contains(p))
            .collect()
    }

    fn require_gear(&self, pos: Position) -> Result<()> {
        if self.is_gear(pos) {
            Ok(())
        } else {
            Err(MeshError::NotAGear(pos))
        }
    }

    /// Row-major index of a position already known to be in bounds.
    fn index_of(&self, pos: Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }
}

impl PartialEq for GearMesh {
    /// Cell-for-cell comparison. The gear-position set is derived from the
    /// cells, so it is not compared separately.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for GearMesh {}
