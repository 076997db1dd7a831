//! **trigrid-core** — triangular lattice geometry.
//!
//! A plane tessellated into alternating up- and down-pointing triangles,
//! addressed by integer `(column, row)` pairs. This crate provides the
//! address and world-space primitives, the derived triangle metrics, and
//! [`TriangleLattice`], which stores one payload per triangle and converts
//! between addresses and world positions. It knows nothing about
//! pathfinding; see `trigrid-paths` for that.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod lattice;
pub mod metrics;

pub use cell::Walkable;
pub use config::LatticeConfig;
pub use error::LatticeError;
pub use geom::{Point, Range, Vec3};
pub use lattice::{ObserverId, TriangleLattice};
pub use metrics::{Orientation, TriangleMetrics};
