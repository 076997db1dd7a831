//! The [`TriangleLattice`] type — a `width × height` array of triangle
//! cells with a closed-form mapping to world space.
//!
//! Column `x` and row `y` address one triangle. Orientation alternates
//! with both parities (see [`Orientation`]), so world centres are not
//! uniformly spaced: two stacked rows form a band of height `2h` and each
//! of the four parity combinations sits at a different offset inside it.

use std::fmt;

use crate::cell::Walkable;
use crate::error::{self, LatticeError};
use crate::geom::{Point, Range, Vec3};
use crate::metrics::{Orientation, TriangleMetrics};

/// Handle returned by [`TriangleLattice::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ChangeCallback = Box<dyn FnMut(Point) + Send + Sync>;

struct Observer {
    id: ObserverId,
    callback: ChangeCallback,
}

// ---------------------------------------------------------------------------
// TriangleLattice
// ---------------------------------------------------------------------------

/// A triangular tessellation of the XZ plane holding one `T` per cell.
pub struct TriangleLattice<T> {
    bounds: Range,
    metrics: TriangleMetrics,
    origin: Vec3,
    cells: Vec<T>,
    observers: Vec<Observer>,
    next_observer: u64,
}

impl<T> TriangleLattice<T> {
    /// Build a lattice, calling `factory` once per address to produce the
    /// cell payloads.
    pub fn new<F>(
        width: i32,
        height: i32,
        edge_length: f32,
        origin: Vec3,
        factory: F,
    ) -> Result<Self, LatticeError>
    where
        F: FnMut(Point) -> T,
    {
        error::validate(width, height, edge_length)?;
        let bounds = Range::new(0, 0, width, height);
        let cells: Vec<T> = bounds.iter().map(factory).collect();
        log::debug!(
            "built {width}x{height} triangle lattice, edge {edge_length}, origin {origin}"
        );
        Ok(Self {
            bounds,
            metrics: TriangleMetrics::new(edge_length),
            origin,
            cells,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Dimensions and constants
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The address range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn metrics(&self) -> TriangleMetrics {
        self.metrics
    }

    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.metrics.edge
    }

    #[inline]
    pub fn triangle_height(&self) -> f32 {
        self.metrics.height
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn orientation(&self, p: Point) -> Orientation {
        Orientation::of(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate transform
    // -----------------------------------------------------------------------

    /// World-space centroid of the triangle at `p`.
    pub fn world_position(&self, p: Point) -> Vec3 {
        let (x, z) = self.metrics.local_center(p);
        Vec3::new(x, 0.0, z) + self.origin
    }

    /// The address of the triangle containing `pos`.
    ///
    /// The result is not clamped; check it with
    /// [`in_bounds`](Self::in_bounds) before use. Non-finite positions and
    /// positions beyond the `i32` address space map to `(-1, -1)`.
    pub fn address(&self, pos: Vec3) -> Point {
        const LIMIT: f32 = i32::MAX as f32;
        let m = &self.metrics;
        let rough_x = (pos.x - self.origin.x + m.half_edge) / m.half_edge;
        let rough_z = (pos.z - self.origin.z + m.height_one_third) / m.height;
        if !(rough_x.abs() < LIMIT && rough_z.abs() < LIMIT) {
            return Point::new(-1, -1);
        }
        let square_x = rough_x.floor();
        let row = rough_z.floor();
        let frac_x = rough_x - square_x;
        let frac_z = rough_z - row;
        let (square_x, row) = (square_x as i32, row as i32);

        // Each unit square in (rough_x, rough_z) is split by one diagonal
        // between two triangles; its direction alternates with parity.
        let step_back = if square_x.rem_euclid(2) == row.rem_euclid(2) {
            frac_x < frac_z
        } else {
            frac_x < 1.0 - frac_z
        };
        Point::new(if step_back { square_x - 1 } else { square_x }, row)
    }

    /// World positions of a sequence of addresses, in the same order.
    pub fn path_positions(&self, path: &[Point]) -> Vec<Vec3> {
        path.iter().map(|&p| self.world_position(p)).collect()
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Clamp `p` into `[0, width) × [0, height)`.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        self.bounds.clamp(p)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Borrow the cell at `p`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Replace the cell at `p`. No-op out of bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = value;
            self.notify(p);
        }
    }

    /// Mutate the cell at `p` in place. Returns `false` (and does nothing)
    /// out of bounds.
    pub fn update(&mut self, p: Point, f: impl FnOnce(&mut T)) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        f(&mut self.cells[i]);
        self.notify(p);
        true
    }

    /// The cell containing the world position `pos`.
    pub fn get_at_world(&self, pos: Vec3) -> Option<&T> {
        self.get(self.address(pos))
    }

    /// Replace the cell containing the world position `pos`.
    pub fn set_at_world(&mut self, pos: Vec3, value: T) {
        let p = self.address(pos);
        self.set(p, value);
    }

    /// Row-major iterator over `(address, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register a callback fired with the address of every changed cell.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(Point) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id);
        self.observers.len() != before
    }

    /// Notify observers that the cell at `p` changed without touching it.
    /// Ignored out of bounds.
    pub fn trigger_cell_changed(&mut self, p: Point) {
        if self.in_bounds(p) {
            self.notify(p);
        }
    }

    fn notify(&mut self, p: Point) {
        log::trace!("cell {p} changed, {} observer(s)", self.observers.len());
        for o in &mut self.observers {
            (o.callback)(p);
        }
    }
}

impl<T: Clone + Default> TriangleLattice<T> {
    /// A copy of the cell at `p`, or `T::default()` out of bounds.
    pub fn at(&self, p: Point) -> T {
        self.get(p).cloned().unwrap_or_default()
    }
}

impl<T: Walkable> TriangleLattice<T> {
    /// Whether the cell at `p` can be walked on. Out of bounds is never
    /// walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.get(p).is_some_and(|c| c.is_walkable())
    }

    /// Set the walkability of the cell at `p` and notify observers.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        self.update(p, |cell| cell.set_walkable(walkable));
    }
}

impl<T: fmt::Debug> fmt::Debug for TriangleLattice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriangleLattice")
            .field("bounds", &self.bounds)
            .field("metrics", &self.metrics)
            .field("origin", &self.origin)
            .field("cells", &self.cells)
            .field("observers", &self.observers.len())
            .finish()
    }
}
