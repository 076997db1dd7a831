//! A* pathfinding over triangular lattices.
//!
//! Each triangle has six neighbours, chosen from one of two offset tables
//! by its orientation ([`UP_OFFSETS`], [`DOWN_OFFSETS`]). Step costs and
//! the heuristic are both the true world-space distance between triangle
//! centroids ([`distance`]), so the heuristic is admissible and
//! consistent.
//!
//! Searches are single-shot: every call allocates its own scratch state
//! and copies walkability out of the [`TrianglePather`] first. Use
//! [`WalkSnapshot`] to copy once and search many times, or to release a
//! lock on a shared lattice before searching.
//!
//! ```
//! use trigrid_core::{Point, TriangleLattice, Vec3};
//! use trigrid_paths::find_path;
//!
//! let mut lattice = TriangleLattice::new(5, 5, 1.0, Vec3::ZERO, |_| true).unwrap();
//! lattice.set_walkable(Point::new(2, 0), false);
//! let path = find_path(&lattice, Point::new(0, 0), Point::new(4, 0));
//! assert_eq!(path.first(), Some(&Point::new(4, 0)));
//! assert_eq!(path.last(), Some(&Point::new(0, 0)));
//! ```

mod astar;
mod distance;
mod neighbors;
mod path;
mod snapshot;
mod traits;

pub use astar::{astar, find_path};
pub use distance::{distance, path_cost};
pub use neighbors::{DOWN_OFFSETS, TriangleNeighbors, UP_OFFSETS, are_neighbors, neighbor_offsets};
pub use path::Path;
pub use snapshot::WalkSnapshot;
pub use traits::TrianglePather;
