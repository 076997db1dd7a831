use trigrid_core::{Orientation, Point, TriangleMetrics};

/// World-space distance between the centroids of two triangles, computed
/// from their addresses.
///
/// Columns are `edge / 2` apart. Rows are `h` apart between triangles of
/// the same orientation; a down triangle sits `h / 3` above an up
/// triangle of the same row, so a one-row step costs `4h/3` vertically
/// from an up triangle and `2h/3` from a down one.
#[inline]
pub fn distance(m: &TriangleMetrics, from: Point, to: Point) -> f32 {
    let dx = (to.x - from.x) as f32 * m.half_edge;
    let rows = (to.y - from.y) as f32 * m.height;
    let dz = match (Orientation::of(from), Orientation::of(to)) {
        (Orientation::Up, Orientation::Down) => rows + m.height_one_third,
        (Orientation::Down, Orientation::Up) => rows - m.height_one_third,
        _ => rows,
    };
    (dx * dx + dz * dz).sqrt()
}

/// Sum of step distances along `cells`.
pub fn path_cost(m: &TriangleMetrics, cells: &[Point]) -> f32 {
    cells.windows(2).map(|w| distance(m, w[0], w[1])).sum()
}
