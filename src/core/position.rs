//! Grid positions.
//!
//! A `Position` addresses one cell of the mesh grid by `(row, col)`.
//! Coordinates are signed so that lattice offsets stepping off the grid
//! (e.g. two rows above row 0) stay representable and can be rejected by
//! a bounds check instead of wrapping.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell address.
///
/// Ordering is row-major, which is the iteration order of gear positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position displaced by `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Row-major index into a grid with `cols` columns, if the position
    /// lies inside a `rows x cols` grid.
    #[must_use]
    pub fn index_in(self, rows: usize, cols: usize) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then(|| row * cols + col)
    }

    /// Inverse of [`Position::index_in`].
    #[must_use]
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new((index / cols) as i32, (index % cols) as i32)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Position::new(4, 4);
        assert_eq!(p.offset(-2, -1), Position::new(2, 3));
        assert_eq!(p.offset(0, 2), Position::new(4, 6));
    }

    #[test]
    fn test_index_in_bounds() {
        assert_eq!(Position::new(0, 0).index_in(9, 9), Some(0));
        assert_eq!(Position::new(2, 3).index_in(9, 9), Some(21));
        assert_eq!(Position::new(8, 8).index_in(9, 9), Some(80));
    }

    #[test]
    fn test_index_out_of_bounds() {
        assert_eq!(Position::new(-2, 1).index_in(9, 9), None);
        assert_eq!(Position::new(0, -1).index_in(9, 9), None);
        assert_eq!(Position::new(9, 0).index_in(9, 9), None);
        assert_eq!(Position::new(0, 9).index_in(9, 9), None);
    }

    #[test]
    fn test_from_index_roundtrip() {
        let p = Position::new(6, 5);
        let index = p.index_in(9, 9).unwrap();
        assert_eq!(Position::from_index(index, 9), p);
    }

    #[test]
    fn test_row_major_ordering() {
        let mut positions = vec![
            Position::new(2, 1),
            Position::new(0, 4),
            Position::new(2, 0),
            Position::new(0, 2),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 2),
                Position::new(0, 4),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(4, 2)), "(4, 2)");
    }
}
