use std::collections::BinaryHeap;

use trigrid_core::Point;

use crate::distance::distance;
use crate::neighbors::TriangleNeighbors;
use crate::path::Path;
use crate::snapshot::{NodeRef, WalkSnapshot, init_cells};
use crate::traits::TrianglePather;

/// Shortest path from `start` to `end` with A*.
///
/// Walkability is copied out of `pather` before the search begins, so the
/// search never observes later changes. Returns `None` when `start` or
/// `end` is out of bounds or unwalkable, or when no path connects them.
pub fn astar<P: TrianglePather + ?Sized>(pather: &P, start: Point, end: Point) -> Option<Path> {
    let bounds = pather.bounds();
    let metrics = pather.metrics();
    let (Some(start_idx), Some(end_idx)) = (bounds.index(start), bounds.index(end)) else {
        log::debug!("path {start} -> {end}: endpoint outside {bounds}");
        return None;
    };

    let mut cells = init_cells(pather, end);
    if !cells[start_idx].walkable || !cells[end_idx].walkable {
        log::debug!("path {start} -> {end}: endpoint not walkable");
        return None;
    }

    cells[start_idx].g = 0.0;
    cells[start_idx].refresh_f();

    let mut open = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        f: cells[start_idx].f,
    });
    let mut expanded = 0usize;
    let mut nbuf = TriangleNeighbors::new();

    let found = loop {
        let Some(current) = open.pop() else {
            break false;
        };
        let ci = current.idx;

        // Superseded entry for a cell already expanded.
        if cells[ci].closed {
            continue;
        }
        if ci == end_idx {
            break true;
        }

        cells[ci].closed = true;
        expanded += 1;
        let current_pos = cells[ci].pos;
        let current_g = cells[ci].g;

        let open_neighbors = nbuf.all(current_pos, |q| {
            bounds
                .index(q)
                .is_some_and(|i| cells[i].walkable && !cells[i].closed)
        });
        for &np in open_neighbors {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let n = &mut cells[ni];
            let tentative_g = current_g + distance(&metrics, current_pos, np);
            if tentative_g < n.g {
                n.g = tentative_g;
                n.refresh_f();
                n.parent = Some(ci);
                open.push(NodeRef { idx: ni, f: n.f });
            }
        }
    };

    if !found {
        log::debug!("path {start} -> {end}: none after expanding {expanded} cells");
        return None;
    }

    let mut path = Vec::new();
    let mut ci = Some(end_idx);
    while let Some(i) = ci {
        path.push(cells[i].pos);
        ci = cells[i].parent;
    }
    let cost = cells[end_idx].g;
    log::debug!(
        "path {start} -> {end}: {} cells, cost {cost:.3}, expanded {expanded}",
        path.len()
    );
    Some(Path {
        cells: path,
        cost,
        expanded,
    })
}

/// Addresses of the shortest path from `start` to `end`, destination
/// first and origin last. Empty when there is no path.
pub fn find_path<P: TrianglePather + ?Sized>(pather: &P, start: Point, end: Point) -> Vec<Point> {
    astar(pather, start, end)
        .map(Path::into_cells)
        .unwrap_or_default()
}

impl WalkSnapshot {
    /// Run [`astar`] over this snapshot.
    pub fn search(&self, start: Point, end: Point) -> Option<Path> {
        astar(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::path_cost;
    use crate::neighbors::{are_neighbors, neighbor_offsets};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::{Arc, RwLock};
    use trigrid_core::{Range, TriangleLattice, Vec3};

    const EPS: f32 = 1e-4;

    fn open_lattice(width: i32, height: i32) -> TriangleLattice<bool> {
        TriangleLattice::new(width, height, 1.0, Vec3::ZERO, |_| true).unwrap()
    }

    /// Exhaustive Dijkstra over the same adjacency and step costs.
    fn brute_force_cost<P: TrianglePather>(pather: &P, start: Point, end: Point) -> Option<f32> {
        let bounds = pather.bounds();
        let m = pather.metrics();
        if !pather.is_walkable(start) || !pather.is_walkable(end) {
            return None;
        }
        let mut dist = vec![f32::INFINITY; bounds.len()];
        let mut done = vec![false; bounds.len()];
        dist[bounds.index(start)?] = 0.0;
        loop {
            let next = (0..dist.len())
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            let Some(i) = next else { break };
            done[i] = true;
            let p = bounds.point(i);
            for &o in neighbor_offsets(p) {
                let q = p + o;
                let Some(j) = bounds.index(q) else { continue };
                if !pather.is_walkable(q) {
                    continue;
                }
                let d = dist[i] + distance(&m, p, q);
                if d < dist[j] {
                    dist[j] = d;
                }
            }
        }
        let d = dist[bounds.index(end)?];
        d.is_finite().then_some(d)
    }

    fn assert_valid<P: TrianglePather>(pather: &P, path: &Path, start: Point, end: Point) {
        assert_eq!(path.destination(), Some(end));
        assert_eq!(path.origin(), Some(start));
        for p in &path.cells {
            assert!(pather.is_walkable(*p), "{p} not walkable");
        }
        for w in path.cells.windows(2) {
            assert!(are_neighbors(w[1], w[0]), "{} -> {} not adjacent", w[1], w[0]);
        }
        let summed = path_cost(&pather.metrics(), &path.cells);
        assert!((summed - path.cost).abs() < EPS);
    }

    #[test]
    fn same_row_walks_along_the_row() {
        let l = open_lattice(5, 5);
        let path = astar(&l, Point::new(0, 0), Point::new(4, 0)).unwrap();
        let expected: Vec<_> = (0..5).rev().map(|x| Point::new(x, 0)).collect();
        assert_eq!(path.cells, expected);
        // Each step joins an up and a down centroid: half an edge across and
        // a third of a height up or down, sqrt(1/3) for a unit edge.
        assert!((path.cost - 4.0 * (1.0f32 / 3.0).sqrt()).abs() < EPS);
        assert!((path.cost - 2.3094).abs() < 1e-3);
        assert_valid(&l, &path, Point::new(0, 0), Point::new(4, 0));
    }

    #[test]
    fn blocked_corridor_detours_through_next_row() {
        let mut l = open_lattice(5, 5);
        let start = Point::new(0, 0);
        let end = Point::new(4, 0);
        let direct = astar(&l, start, end).unwrap();

        l.set_walkable(Point::new(2, 0), false);
        let detour = astar(&l, start, end).unwrap();
        assert_valid(&l, &detour, start, end);
        assert!(!detour.cells.contains(&Point::new(2, 0)));
        assert!(detour.cells.iter().any(|p| p.y == 1));
        assert!(detour.cost > direct.cost + EPS);
    }

    #[test]
    fn trivial_path() {
        let l = open_lattice(4, 4);
        let p = Point::new(2, 3);
        let path = astar(&l, p, p).unwrap();
        assert_eq!(path.cells, vec![p]);
        assert_eq!(path.cost, 0.0);
        assert_eq!(find_path(&l, p, p), vec![p]);
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let mut l = open_lattice(5, 5);
        let start = Point::new(2, 2);
        for &o in neighbor_offsets(start) {
            l.set_walkable(start + o, false);
        }
        assert!(astar(&l, start, Point::new(4, 4)).is_none());
        assert!(find_path(&l, start, Point::new(4, 4)).is_empty());
    }

    #[test]
    fn invalid_endpoints_have_no_path() {
        let mut l = open_lattice(4, 4);
        assert!(find_path(&l, Point::new(-1, 0), Point::new(2, 2)).is_empty());
        assert!(find_path(&l, Point::new(0, 0), Point::new(4, 0)).is_empty());
        l.set_walkable(Point::new(3, 3), false);
        assert!(find_path(&l, Point::new(0, 0), Point::new(3, 3)).is_empty());
        assert!(find_path(&l, Point::new(3, 3), Point::new(0, 0)).is_empty());
        assert!(find_path(&l, Point::new(3, 3), Point::new(3, 3)).is_empty());
    }

    #[test]
    fn disconnected_regions_have_no_path() {
        // A full row of walls splits the lattice in two.
        let mut l = open_lattice(6, 5);
        for x in 0..6 {
            l.set_walkable(Point::new(x, 2), false);
        }
        assert!(astar(&l, Point::new(0, 0), Point::new(5, 4)).is_none());
        assert!(astar(&l, Point::new(0, 0), Point::new(5, 1)).is_some());
    }

    #[test]
    fn deterministic() {
        let mut l = open_lattice(8, 8);
        l.set_walkable(Point::new(3, 3), false);
        l.set_walkable(Point::new(4, 3), false);
        let first = find_path(&l, Point::new(0, 0), Point::new(7, 6));
        assert!(!first.is_empty());
        for _ in 0..5 {
            assert_eq!(find_path(&l, Point::new(0, 0), Point::new(7, 6)), first);
        }
    }

    #[test]
    fn optimal_on_open_4x4() {
        let l = open_lattice(4, 4);
        for start in l.bounds() {
            for end in l.bounds() {
                let path = astar(&l, start, end).unwrap();
                let best = brute_force_cost(&l, start, end).unwrap();
                assert!((path.cost - best).abs() < EPS, "{start} -> {end}: {} vs {best}", path.cost);
                assert_valid(&l, &path, start, end);
            }
        }
    }

    #[test]
    fn optimal_on_random_obstacles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut l = open_lattice(7, 6);
            for p in Range::new(0, 0, 7, 6) {
                if rng.random_bool(0.3) {
                    l.set_walkable(p, false);
                }
            }
            for _ in 0..10 {
                let start = Point::new(rng.random_range(0..7), rng.random_range(0..6));
                let end = Point::new(rng.random_range(0..7), rng.random_range(0..6));
                match (astar(&l, start, end), brute_force_cost(&l, start, end)) {
                    (Some(path), Some(best)) => {
                        assert!((path.cost - best).abs() < EPS);
                        assert_valid(&l, &path, start, end);
                    }
                    (None, None) => {}
                    (found, best) => panic!("{start} -> {end}: {found:?} vs {best:?}"),
                }
            }
        }
    }

    #[test]
    fn snapshot_ignores_later_mutation() {
        let shared = Arc::new(RwLock::new(open_lattice(5, 5)));
        let snap = {
            let guard = shared.read().unwrap();
            WalkSnapshot::capture(&*guard)
        };
        shared.write().unwrap().set_walkable(Point::new(2, 0), false);

        let stale = snap.search(Point::new(0, 0), Point::new(4, 0)).unwrap();
        assert!(stale.cells.contains(&Point::new(2, 0)));
        let fresh = find_path(&*shared.read().unwrap(), Point::new(0, 0), Point::new(4, 0));
        assert!(!fresh.contains(&Point::new(2, 0)));
    }

    #[test]
    fn parallel_searches_agree() {
        let mut l = open_lattice(12, 10);
        for y in 1..9 {
            l.set_walkable(Point::new(6, y), false);
        }
        let expected = find_path(&l, Point::new(0, 5), Point::new(11, 5));
        assert!(!expected.is_empty());
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| find_path(&l, Point::new(0, 5), Point::new(11, 5))))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn heuristic_is_never_above_true_cost() {
        let l = open_lattice(6, 6);
        let m = l.metrics();
        let goal = Point::new(5, 4);
        for p in l.bounds() {
            let best = brute_force_cost(&l, p, goal).unwrap();
            assert!(distance(&m, p, goal) <= best + EPS);
        }
    }
}
