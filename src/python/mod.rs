//! Python bindings for the gear mesh.
//!
//! # Quick Start
//!
//! ```python
//! import gear_mesh as gm
//!
//! # Canonical board, five gears painted red
//! mesh = gm.GearMesh(colored=5, color="#ff0000", seed=42)
//!
//! # Turn the ring around the center gear
//! assert mesh.rotate(4, 4)
//!
//! # Play with history and undo
//! puzzle = gm.Puzzle(mesh, seed=7)
//! puzzle.scramble(20)
//! puzzle.undo()
//! ```

use pyo3::prelude::*;

mod py_mesh;

pub use py_mesh::*;

/// gear_mesh: state model for a hex-packed gear puzzle.
#[pymodule]
fn gear_mesh(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGearMesh>()?;
    m.add_class::<PyPuzzle>()?;

    Ok(())
}
