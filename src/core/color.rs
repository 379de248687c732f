//! Gear colors and grid cells.
//!
//! A cell either holds no gear (`Cell::Empty`) or a gear showing a color
//! (`Cell::Gear`). The empty case is its own variant rather than a reserved
//! color value, so no color token can ever be mistaken for "no gear".

use serde::{Deserialize, Serialize};

/// Default fill for gears that were not pre-colored.
pub const DEFAULT_GEAR_COLOR: &str = "#00c7fd";

/// Opaque color token (nominally `#rrggbb`).
///
/// The mesh never interprets colors; it only moves them between gears
/// and compares them for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    /// Create a new color token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_GEAR_COLOR)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contents of one grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No gear is centered here.
    #[default]
    Empty,
    /// A gear is centered here, showing this color.
    Gear(Color),
}

impl Cell {
    /// Create a gear cell.
    pub fn gear(color: impl Into<Color>) -> Self {
        Cell::Gear(color.into())
    }

    /// Whether a gear is centered in this cell.
    #[must_use]
    pub fn is_gear(&self) -> bool {
        matches!(self, Cell::Gear(_))
    }

    /// The gear's color, or `None` for an empty cell.
    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        match self {
            Cell::Gear(color) => Some(color),
            Cell::Empty => None,
        }
    }
}
