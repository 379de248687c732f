//! Initial grid layouts.
//!
//! A `Layout` is the rectangular cell array a `GearMesh` is built from.
//! Gear centers sit on the packed-circle lattice: neighbouring gears are
//! two rows and one column apart, or zero rows and two columns apart.
//!
//! ## Canonical board
//!
//! ```text
//! row 0 : . . G . G . G . .
//! row 2 : . G . G . G . G .
//! row 4 : G . G . G . G . G
//! row 6 : . G . G . G . G .
//! row 8 : . . G . G . G . .
//! ```
//!
//! Odd rows are empty. `Layout::hexagon(r, ..)` generalizes this to any
//! radius; the canonical board is radius 2 (19 gears).

use super::color::{Cell, Color};
use super::error::{MeshError, Result};
use super::position::Position;

/// Radius of the canonical 19-gear board.
pub const CANONICAL_RADIUS: usize = 2;

/// Rectangular array of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Layout {
    /// Build a layout from explicit rows of cells.
    ///
    /// Fails with `InvalidArgument` if there are no cells or the rows
    /// differ in length.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 {
            return Err(MeshError::invalid_argument("layout has no cells"));
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MeshError::invalid_argument(format!(
                    "layout row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a layout from a 0/1 occupancy mask.
    ///
    /// Every non-zero entry becomes a gear showing `color`.
    pub fn from_mask<R: AsRef<[u8]>>(mask: &[R], color: &Color) -> Result<Self> {
        let rows = mask
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&v| if v != 0 { Cell::Gear(color.clone()) } else { Cell::Empty })
                    .collect()
            })
            .collect();
        Self::from_cells(rows)
    }

    /// Hex-packed board with `3r² + 3r + 1` gears on a `(4r+1) x (4r+1)` grid.
    ///
    /// Gear row `k` (grid row `2k`, `k` in `0..=2r`) is indented by
    /// `d = |k - r|` and holds gears at columns `d, d+2, ..., 4r - d`.
    #[must_use]
    pub fn hexagon(radius: usize, color: &Color) -> Self {
        let size = 4 * radius + 1;
        let mut cells = vec![Cell::Empty; size * size];

        for k in 0..=2 * radius {
            let indent = k.abs_diff(radius);
            let row = 2 * k;
            for col in (indent..=4 * radius - indent).step_by(2) {
                cells[row * size + col] = Cell::Gear(color.clone());
            }
        }

        Self {
            rows: size,
            cols: size,
            cells,
        }
    }

    /// The canonical 9x9, 19-gear board.
    #[must_use]
    pub fn canonical(color: &Color) -> Self {
        Self::hexagon(CANONICAL_RADIUS, color)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at a position, if inside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        pos.index_in(self.rows, self.cols).map(|i| &self.cells[i])
    }

    /// Number of gear cells.
    #[must_use]
    pub fn gear_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_gear()).count()
    }

    /// Consume the layout, yielding `(rows, cols, cells)`.
    pub(crate) fn into_parts(self) -> (usize, usize, Vec<Cell>) {
        (self.rows, self.cols, self.cells)
    }
}
