use trigrid_core::error::validate;
use trigrid_core::{LatticeError, Point, Range, TriangleMetrics};

use crate::distance::distance;
use crate::traits::TrianglePather;

// ---------------------------------------------------------------------------
// Search-local cell state
// ---------------------------------------------------------------------------

/// Per-address A* state, allocated fresh for every search.
#[derive(Clone, Debug)]
pub(crate) struct PathCell {
    pub(crate) pos: Point,
    pub(crate) walkable: bool,
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) f: f32,
    pub(crate) parent: Option<usize>,
    pub(crate) closed: bool,
}

impl PathCell {
    #[inline]
    pub(crate) fn refresh_f(&mut self) {
        self.f = self.g + self.h;
    }
}

/// Initialise one [`PathCell`] per address: walkability copied from
/// `pather`, `g` at infinity, `h` the distance to `goal`.
pub(crate) fn init_cells<P: TrianglePather + ?Sized>(pather: &P, goal: Point) -> Vec<PathCell> {
    let metrics = pather.metrics();
    pather
        .bounds()
        .iter()
        .map(|pos| {
            let h = distance(&metrics, pos, goal);
            PathCell {
                pos,
                walkable: pather.is_walkable(pos),
                g: f32::INFINITY,
                h,
                f: f32::INFINITY,
                parent: None,
                closed: false,
            }
        })
        .collect()
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest `f` first and,
/// among equal `f`, the lowest linear index.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f32,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// WalkSnapshot
// ---------------------------------------------------------------------------

/// An owned copy of a lattice's walkability and metrics.
///
/// Capture one while holding a lattice lock, release the lock, then
/// search as often as needed; later lattice mutations are not seen.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkSnapshot {
    bounds: Range,
    metrics: TriangleMetrics,
    walkable: Vec<bool>,
}

impl WalkSnapshot {
    /// Copy the current walkability of `pather`.
    pub fn capture<P: TrianglePather + ?Sized>(pather: &P) -> Self {
        let bounds = pather.bounds();
        let walkable = bounds.iter().map(|p| pather.is_walkable(p)).collect();
        Self {
            bounds,
            metrics: pather.metrics(),
            walkable,
        }
    }

    /// Build a snapshot from host-owned data. `walkable` is row-major,
    /// indexed by `col + row * width`.
    pub fn from_parts(
        width: i32,
        height: i32,
        edge_length: f32,
        walkable: Vec<bool>,
    ) -> Result<Self, LatticeError> {
        validate(width, height, edge_length)?;
        let bounds = Range::new(0, 0, width, height);
        if walkable.len() != bounds.len() {
            return Err(LatticeError::SizeMismatch {
                expected: bounds.len(),
                got: walkable.len(),
            });
        }
        Ok(Self {
            bounds,
            metrics: TriangleMetrics::new(edge_length),
            walkable,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }
}

impl TrianglePather for WalkSnapshot {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn metrics(&self) -> TriangleMetrics {
        self.metrics
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.walkable[i])
    }
}
