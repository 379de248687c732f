//! Figure description of a mesh.
//!
//! `SceneRenderer` lays the mesh out as a plot: one filled circle per
//! gear at `(x = col, y = row)` with y growing upward, equal aspect and
//! hidden axes. The resulting `Scene` is plain data (serde-serializable),
//! so any plotting frontend can draw it.

use serde::Serialize;

use crate::core::{Color, Position};
use crate::mesh::GearMesh;

use super::overlay::Overlay;
use super::Renderer;

/// Gear circle radius in grid units. Touching gears are `sqrt(5)` apart.
pub const GEAR_RADIUS: f64 = 0.9;

/// Fill opacity of gear circles.
pub const GEAR_ALPHA: f64 = 0.5;

/// A filled circle for one gear.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CirclePatch {
    pub position: Position,
    pub center: (f64, f64),
    pub radius: f64,
    pub alpha: f64,
    pub fill: Color,
}

/// Outline drawn around a highlighted gear.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub position: Position,
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Color,
}

/// Text placed at a point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub anchor: (f64, f64),
    pub text: String,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub equal_aspect: bool,
    pub axes_visible: bool,
    pub circles: Vec<CirclePatch>,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
}

/// Builds a `Scene` from a mesh and overlay.
#[derive(Clone, Debug)]
pub struct SceneRenderer {
    pub radius: f64,
    pub alpha: f64,
    pub highlight_color: Color,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self {
            radius: GEAR_RADIUS,
            alpha: GEAR_ALPHA,
            highlight_color: Color::new("#ff0000"),
        }
    }
}

impl SceneRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: impl Into<Color>) -> Self {
        self.highlight_color = color.into();
        self
    }
}

fn center_of(pos: Position) -> (f64, f64) {
    (f64::from(pos.col), f64::from(pos.row))
}

impl Renderer for SceneRenderer {
    type Output = Scene;

    fn render(&self, mesh: &GearMesh, overlay: &Overlay) -> Scene {
        let circles = mesh
            .colors()
            .map(|(pos, color)| CirclePatch {
                position: pos,
                center: center_of(pos),
                radius: self.radius,
                alpha: self.alpha,
                fill: color.clone(),
            })
            .collect();

        // Highlights that are not gears have nothing to outline
        let markers = overlay
            .highlights
            .iter()
            .filter(|&&pos| mesh.is_gear(pos))
            .map(|&pos| Marker {
                position: pos,
                center: center_of(pos),
                radius: self.radius,
                color: self.highlight_color.clone(),
            })
            .collect();

        let labels = overlay
            .annotations
            .iter()
            .filter(|a| mesh.contains(a.position))
            .map(|a| Label {
                anchor: center_of(a.position),
                text: a.text.clone(),
            })
            .collect();

        Scene {
            x_limits: (-1.0, mesh.cols() as f64),
            y_limits: (-1.0, mesh.rows() as f64),
            equal_aspect: true,
            axes_visible: false,
            circles,
            markers,
            labels,
        }
    }
}
