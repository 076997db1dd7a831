//! Build a triangle lattice, scatter obstacles and walk across it.
//!
//! Usage: `trigrid-demo [config.json] [seed]`
//!
//! The optional JSON file holds a `LatticeConfig`, e.g.
//! `{"width": 30, "height": 12, "edge_length": 1.0}`. Set `RUST_LOG=debug`
//! to see lattice and search logging.

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use trigrid_core::{LatticeConfig, Point};
use trigrid_demos::{OBSTACLE_DENSITY, Tile, render, scatter_obstacles};
use trigrid_paths::{TriangleNeighbors, WalkSnapshot};

fn load_config(path: Option<&str>) -> Result<LatticeConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(LatticeConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str))?;
    let seed = match args.get(2) {
        Some(s) => s.parse()?,
        None => 42,
    };

    let mut lattice = config.build(|_| Tile::default())?;
    let changed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&changed);
    lattice.subscribe(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let start = Point::new(0, 0);
    let end = Point::new(lattice.width() - 1, lattice.height() - 1);
    let blocked = scatter_obstacles(&mut lattice, OBSTACLE_DENSITY, seed, &[start, end]);
    log::info!(
        "blocked {blocked} of {} cells ({} change notifications)",
        lattice.len(),
        changed.load(Ordering::Relaxed)
    );

    let mut neighbors = TriangleNeighbors::new();
    let open_exits = neighbors
        .all(start, |p| lattice.is_walkable(p))
        .len();
    log::info!("start {start} has {open_exits} walkable neighbour(s)");

    let snapshot = WalkSnapshot::capture(&lattice);
    match snapshot.search(start, end) {
        Some(path) => {
            print!("{}", render(&lattice, &path.cells));
            println!("{path}");
            println!("expanded {} cells", path.expanded);
            let waypoints = lattice.path_positions(&path.forward().collect::<Vec<_>>());
            for (p, w) in path.forward().zip(&waypoints) {
                println!("  {p} -> {w}");
            }
        }
        None => {
            print!("{}", render(&lattice, &[]));
            println!("no path from {start} to {end}");
        }
    }
    Ok(())
}
