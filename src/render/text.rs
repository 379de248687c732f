//! Plain-text rendering for logs, tests and terminals.

use crate::core::{Color, Position};
use crate::mesh::GearMesh;

use super::overlay::Overlay;
use super::Renderer;

const EMPTY_GLYPH: char = '.';
const HIGHLIGHT_GLYPH: char = '*';
const OVERFLOW_GLYPH: char = '#';

/// Renders the grid as text, row 0 at the bottom.
///
/// Each distinct color gets a letter (`a`, `b`, ...) in order of first
/// appearance; a legend follows the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    /// Omit the color legend.
    pub hide_legend: bool,
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.hide_legend = true;
        self
    }
}

fn glyph(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|&i| i < 26)
        .map_or(OVERFLOW_GLYPH, |i| char::from(b'a' + i))
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, mesh: &GearMesh, overlay: &Overlay) -> String {
        let mut palette: Vec<&Color> = Vec::new();
        for (_, color) in mesh.colors() {
            if !palette.contains(&color) {
                palette.push(color);
            }
        }

        let mut out = String::new();
        for row in (0..mesh.rows()).rev() {
            let line: Vec<String> = (0..mesh.cols())
                .map(|col| {
                    let pos = Position::new(row as i32, col as i32);
                    let ch = match mesh.color_at(pos).ok().and_then(|cell| cell.color()) {
                        None => EMPTY_GLYPH,
                        Some(_) if overlay.is_highlighted(pos) => HIGHLIGHT_GLYPH,
                        Some(color) => palette
                            .iter()
                            .position(|&c| c == color)
                            .map_or(OVERFLOW_GLYPH, glyph),
                    };
                    ch.to_string()
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        if !self.hide_legend {
            for (i, color) in palette.iter().enumerate() {
                out.push_str(&format!("{} {}\n", glyph(i), color));
            }
        }

        out
    }
}
