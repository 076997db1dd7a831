use trigrid_core::{Point, Range, TriangleLattice, TriangleMetrics, Walkable};

/// Read-only walkability view consumed by the path search.
pub trait TrianglePather {
    /// The address range searched.
    fn bounds(&self) -> Range;

    /// Geometric constants used for step costs and the heuristic.
    fn metrics(&self) -> TriangleMetrics;

    /// Whether `p` can be entered. Only called for in-bounds addresses.
    fn is_walkable(&self, p: Point) -> bool;
}

impl<T: Walkable> TrianglePather for TriangleLattice<T> {
    fn bounds(&self) -> Range {
        TriangleLattice::bounds(self)
    }

    fn metrics(&self) -> TriangleMetrics {
        TriangleLattice::metrics(self)
    }

    fn is_walkable(&self, p: Point) -> bool {
        TriangleLattice::is_walkable(self, p)
    }
}
