use std::fmt;

use trigrid_core::Point;

/// A found path.
///
/// `cells` runs from the destination back to the origin; use
/// [`forward`](Path::forward) for start-to-end order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Point>,
    /// Summed step distances, in world units.
    pub cost: f32,
    /// Number of cells expanded (closed) by the search.
    pub expanded: usize,
}

impl Path {
    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The end address of the search.
    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    /// The start address of the search.
    #[inline]
    pub fn origin(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Cells in walking order, origin first.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }

    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path of {} cells, cost {:.3}:", self.len(), self.cost)?;
        for p in self.forward() {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}
