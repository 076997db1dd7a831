//! Triangle metrics and orientation.
//!
//! Every spacing constant of the tessellation is a pure function of the
//! triangle edge length. [`TriangleMetrics`] computes them once; both the
//! lattice transform and the path cost metric read them from here.

use crate::geom::Point;

/// Whether a triangle points up (apex toward +Z) or down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Up,
    Down,
}

impl Orientation {
    /// Orientation of the triangle at `p`: up when the column and row
    /// parities agree, down otherwise.
    #[inline]
    pub fn of(p: Point) -> Self {
        if (p.x.rem_euclid(2) ^ p.y.rem_euclid(2)) == 0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// Spacing constants derived from the triangle edge length.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleMetrics {
    pub edge: f32,
    pub height: f32,
    pub half_edge: f32,
    pub height_one_third: f32,
    pub height_two_thirds: f32,
    pub height_four_thirds: f32,
    pub height_times_two: f32,
}

impl TriangleMetrics {
    /// Compute the metrics of an equilateral triangle with the given edge.
    pub fn new(edge: f32) -> Self {
        let height = 3f32.sqrt() * edge / 2.0;
        Self {
            edge,
            height,
            half_edge: edge / 2.0,
            height_one_third: height / 3.0,
            height_two_thirds: height * 2.0 / 3.0,
            height_four_thirds: height * 4.0 / 3.0,
            height_times_two: height * 2.0,
        }
    }

    /// Centroid of the triangle at `p`, relative to the lattice origin, as
    /// `(x, z)`.
    ///
    /// Two stacked rows form a band of height `2h`; the centroid offset
    /// inside the band depends on both parities.
    pub fn local_center(&self, p: Point) -> (f32, f32) {
        let col_pairs = p.x.div_euclid(2) as f32;
        let row_pairs = p.y.div_euclid(2) as f32;
        let band = row_pairs * self.height_times_two;
        match (p.x.rem_euclid(2), p.y.rem_euclid(2)) {
            (0, 0) => (col_pairs * self.edge, band),
            (0, _) => (col_pairs * self.edge, self.height_four_thirds + band),
            (_, 0) => (
                self.half_edge + col_pairs * self.edge,
                self.height_one_third + band,
            ),
            _ => (self.half_edge + col_pairs * self.edge, self.height + band),
        }
    }
}
