//! Gear mesh state model.
//!
//! - `GearMesh`: grid, gear positions, neighbour lookup and rotation
//! - `ring`: the fixed six-neighbour geometry of the lattice

mod gear_mesh;
pub mod ring;

pub use gear_mesh::GearMesh;
pub use ring::{Ring, RING_OFFSETS, RING_SIZE};
