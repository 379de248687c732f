//! Core value types: positions, colors, layouts, RNG, configuration, errors.
//!
//! These are the building blocks the mesh is made from. None of them know
//! about the ring rule; that lives in `mesh`.

pub mod position;
pub mod color;
pub mod layout;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use position::Position;
pub use color::{Cell, Color, DEFAULT_GEAR_COLOR};
pub use layout::{Layout, CANONICAL_RADIUS};
pub use rng::{MeshRng, MeshRngState};
pub use config::{MeshConfig, COLORING_CONTEXT};
pub use action::Rotation;
pub use error::{MeshError, Result};
