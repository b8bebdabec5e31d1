//! Numerical building blocks.
//!
//! - `mesh`: Linearly spaced sweep axes with a tolerant end-point policy

pub mod mesh;

pub use mesh::{Mesh, MAX_MESH_POINTS, MESH_TOLERANCE};
