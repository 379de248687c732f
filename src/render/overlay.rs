//! Highlight and annotation hooks.
//!
//! An `Overlay` lists visual markers to draw on top of a mesh. Building
//! one never touches the mesh; renderers read both side by side.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Result};
use crate::mesh::GearMesh;

/// A text label anchored at a grid position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: Position,
    pub text: String,
}

/// Markers and labels drawn over a mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    /// Gears to mark.
    pub highlights: Vec<Position>,

    /// Text labels.
    pub annotations: Vec<Annotation>,
}

impl Overlay {
    /// Empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a gear.
    #[must_use]
    pub fn highlight(mut self, pos: Position) -> Self {
        self.highlights.push(pos);
        self
    }

    /// Label a position.
    #[must_use]
    pub fn annotate(mut self, pos: Position, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            position: pos,
            text: text.into(),
        });
        self
    }

    /// Mark the ring that actuating `center` would turn, labelling each
    /// member with its slot in rotation order.
    pub fn ring_of(mesh: &GearMesh, center: Position) -> Result<Self> {
        let ring = mesh.neighbors_of(center)?;
        Ok(ring
            .iter()
            .enumerate()
            .fold(Self::new().highlight(center), |overlay, (slot, &pos)| {
                overlay.highlight(pos).annotate(pos, slot.to_string())
            }))
    }

    /// Whether `pos` is highlighted.
    #[must_use]
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlights.contains(&pos)
    }
}
