use trigrid_core::{Orientation, Point};

/// Neighbour offsets of an up-pointing triangle.
///
/// Left and right share an edge, `(0, -1)` shares the base, `(0, +1)`
/// touches the apex, and the two `(±2, -1)` triangles touch the base
/// corners.
pub const UP_OFFSETS: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-2, -1),
    Point::new(2, -1),
];

/// Neighbour offsets of a down-pointing triangle. Mirror of
/// [`UP_OFFSETS`] across the row axis.
pub const DOWN_OFFSETS: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-2, 1),
    Point::new(2, 1),
];

/// The offset table for the triangle at `p`.
#[inline]
pub fn neighbor_offsets(p: Point) -> &'static [Point; 6] {
    match Orientation::of(p) {
        Orientation::Up => &UP_OFFSETS,
        Orientation::Down => &DOWN_OFFSETS,
    }
}

/// Whether `b` is one of the six neighbours of `a`.
pub fn are_neighbors(a: Point, b: Point) -> bool {
    neighbor_offsets(a).iter().any(|&o| a + o == b)
}

/// Reusable buffer for neighbour enumeration.
pub struct TriangleNeighbors {
    buf: Vec<Point>,
}

impl Default for TriangleNeighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleNeighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(6),
        }
    }

    /// Neighbours of `p` for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for &o in neighbor_offsets(p) {
            let n = p + o;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
