//! Mesh configuration.
//!
//! `MeshConfig` collects every construction parameter in one place:
//! - board radius (hex-packed layout, see `Layout::hexagon`)
//! - base color for all gears
//! - how many gears to pre-color, and with what
//! - RNG seed for choosing the pre-colored gears
//!
//! There is no environment or file configuration; a config is built in
//! code and turned into a `GearMesh` with `build()`.

use super::color::Color;
use super::error::Result;
use super::layout::{Layout, CANONICAL_RADIUS};
use super::rng::MeshRng;
use crate::mesh::GearMesh;

/// RNG stream used to pick pre-colored gears.
pub const COLORING_CONTEXT: &str = "coloring";

/// Complete construction parameters for a hex-packed mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshConfig {
    /// Board radius. 2 gives the canonical 19-gear board.
    pub radius: usize,

    /// Color every gear starts with.
    pub base_color: Color,

    /// Number of gears to pre-color with `colored_color`.
    pub colored_count: usize,

    /// Color applied to the pre-colored gears.
    pub colored_color: Color,

    /// Seed for the coloring stream.
    pub seed: u64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            radius: CANONICAL_RADIUS,
            base_color: Color::default(),
            colored_count: 0,
            colored_color: Color::default(),
            seed: 0,
        }
    }
}

impl MeshConfig {
    /// Canonical board, all gears in the default color.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board radius.
    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Set the color every gear starts with.
    #[must_use]
    pub fn with_base_color(mut self, color: impl Into<Color>) -> Self {
        self.base_color = color.into();
        self
    }

    /// Pre-color `count` randomly chosen gears with `color`.
    #[must_use]
    pub fn with_colored(mut self, count: usize, color: impl Into<Color>) -> Self {
        self.colored_count = count;
        self.colored_color = color.into();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The layout this config describes, before pre-coloring.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::hexagon(self.radius, &self.base_color)
    }

    /// Build the mesh.
    ///
    /// Fails with `InvalidArgument` if `colored_count` exceeds the number
    /// of gears on the board.
    pub fn build(&self) -> Result<GearMesh> {
        let mut rng = MeshRng::new(self.seed).for_context(COLORING_CONTEXT);
        GearMesh::with_colored(
            self.layout(),
            self.colored_count,
            self.colored_color.clone(),
            &mut rng,
        )
    }
}
