//! Read-only presentation of a mesh.
//!
//! Renderers take `&GearMesh` and so cannot change the model. They only use
//! the public accessors (`positions`, `colors`, `color_at`).
//!
//! - `SceneRenderer`: circle-per-gear figure description
//! - `TextRenderer`: plain-text grid
//! - `Overlay`: highlight and annotation hooks shared by both

mod overlay;
mod scene;
mod text;

pub use overlay::{Annotation, Overlay};
pub use scene::{CirclePatch, Label, Marker, Scene, SceneRenderer, GEAR_ALPHA, GEAR_RADIUS};
pub use text::TextRenderer;

use crate::mesh::GearMesh;

/// A consumer that draws a mesh.
pub trait Renderer {
    /// What a render produces (a figure description, a string, ...).
    type Output;

    /// Draw `mesh` with `overlay` on top.
    fn render(&self, mesh: &GearMesh, overlay: &Overlay) -> Self::Output;
}
