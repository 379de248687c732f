//! Mesh and puzzle bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{MeshConfig, MeshError, Position, DEFAULT_GEAR_COLOR};
use crate::mesh::GearMesh;
use crate::puzzle::Puzzle;
use crate::render::{Overlay, Renderer, TextRenderer};

impl From<MeshError> for PyErr {
    fn from(err: MeshError) -> Self {
        match &err {
            MeshError::OutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            MeshError::InvalidArgument(_) | MeshError::NotAGear(_) => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

fn to_tuple(pos: Position) -> (i32, i32) {
    (pos.row, pos.col)
}

/// Python wrapper for GearMesh.
#[pyclass(name = "GearMesh")]
#[derive(Clone, Debug)]
pub struct PyGearMesh(pub GearMesh);

#[pymethods]
impl PyGearMesh {
    /// Create a hex-packed mesh.
    ///
    /// # Arguments
    /// - radius: Board radius (2 = canonical 19-gear board)
    /// - colored: Number of gears to pre-color
    /// - color: Color for the pre-colored gears
    /// - base_color: Color of every other gear
    /// - seed: RNG seed for choosing the pre-colored gears
    #[new]
    #[pyo3(signature = (
        radius = 2,
        colored = 0,
        color = String::from("#ff0000"),
        base_color = String::from(DEFAULT_GEAR_COLOR),
        seed = 42
    ))]
    fn new(
        radius: usize,
        colored: usize,
        color: String,
        base_color: String,
        seed: u64,
    ) -> PyResult<Self> {
        let mesh = MeshConfig::new()
            .with_radius(radius)
            .with_base_color(base_color)
            .with_colored(colored, color)
            .with_seed(seed)
            .build()?;
        Ok(Self(mesh))
    }

    #[getter]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    /// Gear positions as (row, col) tuples, row-major.
    fn positions(&self) -> Vec<(i32, i32)> {
        self.0.positions().iter().copied().map(to_tuple).collect()
    }

    /// Color at a cell, or None for a cell without a gear.
    fn color_at(&self, row: i32, col: i32) -> PyResult<Option<String>> {
        let cell = self.0.color_at(Position::new(row, col))?;
        Ok(cell.color().map(|c| c.as_str().to_string()))
    }

    /// Neighbours of a gear in rotation order.
    fn neighbors_of(&self, row: i32, col: i32) -> PyResult<Vec<(i32, i32)>> {
        let ring = self.0.neighbors_of(Position::new(row, col))?;
        Ok(ring.into_iter().map(to_tuple).collect())
    }

    /// Actuate a gear. Returns False if its ring is incomplete.
    fn rotate(&mut self, row: i32, col: i32) -> PyResult<bool> {
        Ok(self.0.rotate(Position::new(row, col))?)
    }

    /// Gears with a complete ring.
    fn actuatable(&self) -> Vec<(i32, i32)> {
        self.0.actuatable().into_iter().map(to_tuple).collect()
    }

    /// Occupancy as a [rows, cols] float64 array: 1.0 at gear centers.
    fn mask<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let (rows, cols) = (self.0.rows(), self.0.cols());
        let mut data = vec![0.0f64; rows * cols];
        for pos in self.0.positions() {
            data[pos.row as usize * cols + pos.col as usize] = 1.0;
        }

        PyArray1::from_vec_bound(py, data)
            .reshape([rows, cols])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Plain-text picture of the grid, row 0 at the bottom.
    fn render_text(&self) -> String {
        TextRenderer::new().render(&self.0, &Overlay::new())
    }

    fn __repr__(&self) -> String {
        format!(
            "GearMesh(rows={}, cols={}, gears={})",
            self.0.rows(),
            self.0.cols(),
            self.0.gear_count()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Puzzle.
#[pyclass(name = "Puzzle")]
pub struct PyPuzzle(pub Puzzle);

#[pymethods]
impl PyPuzzle {
    #[new]
    #[pyo3(signature = (mesh, seed = 42))]
    fn new(mesh: &PyGearMesh, seed: u64) -> Self {
        Self(Puzzle::new(mesh.0.clone(), seed))
    }

    /// Snapshot of the current mesh.
    fn mesh(&self) -> PyGearMesh {
        PyGearMesh(self.0.mesh().clone())
    }

    /// Actuate a gear, recording the move if the ring turned.
    fn actuate(&mut self, row: i32, col: i32) -> PyResult<bool> {
        Ok(self.0.actuate(Position::new(row, col))?)
    }

    /// Undo the last move. Returns the actuated gear, or None.
    fn undo(&mut self) -> PyResult<Option<(i32, i32)>> {
        Ok(self.0.undo()?.map(|r| to_tuple(r.center)))
    }

    /// Apply random moves. Returns how many were applied.
    fn scramble(&mut self, moves: usize) -> PyResult<usize> {
        Ok(self.0.scramble(moves)?)
    }

    #[getter]
    fn move_count(&self) -> usize {
        self.0.move_count()
    }

    fn __repr__(&self) -> String {
        format!("Puzzle(moves={})", self.0.move_count())
    }
}
