//! # gear-mesh
//!
//! State model for a mechanical gear puzzle: gears packed hexagonally on a
//! square grid, where actuating one gear turns the ring of six gears
//! around it one step, cycling their colors.
//!
//! ## Design Principles
//!
//! 1. **Fixed Geometry**: Gear positions are computed once per mesh and
//!    never change. Only colors move.
//!
//! 2. **Complete Rings Only**: A gear rotates its neighbours only when all
//!    six are present. Edge gears report `false`, not an error.
//!
//! 3. **Deterministic**: All randomness (pre-coloring, scrambling) comes
//!    from an explicit seeded `MeshRng`.
//!
//! ## Example
//!
//! ```
//! use gear_mesh::{Color, GearMesh, Layout, Position};
//!
//! let mut mesh = GearMesh::new(Layout::canonical(&Color::default()));
//! assert_eq!(mesh.positions().len(), 19);
//!
//! // The center gear has a complete ring
//! assert_eq!(mesh.rotate(Position::new(4, 4)), Ok(true));
//!
//! // A corner gear does not
//! assert_eq!(mesh.rotate(Position::new(0, 2)), Ok(false));
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions, colors, layouts, RNG, configuration, errors
//! - `mesh`: `GearMesh` and the ring geometry
//! - `puzzle`: Play sessions with history, undo and scrambling
//! - `render`: Read-only renderers and overlays
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod mesh;
pub mod puzzle;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, Layout, MeshConfig, MeshError, MeshRng, MeshRngState, Position, Result,
    Rotation, DEFAULT_GEAR_COLOR,
};

pub use crate::mesh::{GearMesh, Ring, RING_OFFSETS, RING_SIZE};

pub use crate::puzzle::Puzzle;

pub use crate::render::{Overlay, Renderer, Scene, SceneRenderer, TextRenderer};
