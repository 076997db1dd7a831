//! Shared pieces of the trigrid demo: a tile payload, obstacle scattering
//! and a plain-text rendering of a lattice with a path overlay.

use rand::{Rng, SeedableRng};
use trigrid_core::{Orientation, Point, TriangleLattice, Walkable};

pub const OBSTACLE_DENSITY: f64 = 0.25;

/// Demo cell payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub walkable: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self { walkable: true }
    }
}

impl Walkable for Tile {
    fn is_walkable(&self) -> bool {
        self.walkable
    }

    fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }
}

/// Mark roughly `density` of the cells unwalkable, never touching `keep`.
/// Returns how many cells were blocked.
pub fn scatter_obstacles(
    lattice: &mut TriangleLattice<Tile>,
    density: f64,
    seed: u64,
    keep: &[Point],
) -> usize {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut blocked = 0;
    for p in lattice.bounds() {
        if keep.contains(&p) {
            continue;
        }
        if rng.random_bool(density) {
            lattice.set_walkable(p, false);
            blocked += 1;
        }
    }
    blocked
}

/// Render the lattice top row first. Walkable cells show their
/// orientation (`^` or `v`), blocked cells `#`, path cells `*`, and the
/// path's origin and destination `S` and `E`.
pub fn render(lattice: &TriangleLattice<Tile>, path: &[Point]) -> String {
    let mut out = String::with_capacity(lattice.len() + lattice.height() as usize);
    for y in (0..lattice.height()).rev() {
        for x in 0..lattice.width() {
            let p = Point::new(x, y);
            let ch = if path.last() == Some(&p) {
                'S'
            } else if path.first() == Some(&p) {
                'E'
            } else if path.contains(&p) {
                '*'
            } else if !lattice.is_walkable(p) {
                '#'
            } else {
                match Orientation::of(p) {
                    Orientation::Up => '^',
                    Orientation::Down => 'v',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
