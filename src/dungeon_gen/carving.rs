//! Room boxes, corridors and the outer wall. All writes go through `Grid::set`,
//! which clips to the grid.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::regions::Centroid;
use crate::grid::Grid;
use crate::tile::TileKind;

/// Carve a box of random half-extent around every centroid.
///
/// Half-extents are drawn independently per axis from `half_extent.0..half_extent.1`
/// and the box spans `[center - half, center + half)` on each axis. Anything inside,
/// walls included, becomes `Empty`.
pub fn carve_rooms(
    centroids: &[Centroid],
    grid: &mut Grid,
    half_extent: (i32, i32),
    rng: &mut impl Rng,
) {
    let (min, max) = half_extent;
    for centroid in centroids {
        let half_rows = rng.gen_range(min..max);
        let half_cols = rng.gen_range(min..max);
        grid.fill_block(
            centroid.row - half_rows,
            centroid.col - half_cols,
            half_rows * 2,
            half_cols * 2,
            TileKind::Empty,
        );
    }
    debug!("carved {} rooms", centroids.len());
}

/// A corridor between two regions, stored as `(lower id, higher id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corridor {
    pub from: usize,
    pub to: usize,
}

impl Corridor {
    /// Canonical form of an unordered pair
    pub fn between(a: usize, b: usize) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }
}

/// Every unordered pair of distinct regions whose centroids are closer than `min_distance`.
/// Each pair appears once, in ascending id order.
pub fn find_corridors(centroids: &[Centroid], min_distance: f64) -> Vec<Corridor> {
    let mut connected = HashSet::new();
    let mut corridors = Vec::new();

    for a in centroids {
        for b in centroids {
            if a.region == b.region {
                continue;
            }
            if a.distance_to(b) >= min_distance {
                continue;
            }
            let corridor = Corridor::between(a.region, b.region);
            if connected.insert(corridor) {
                corridors.push(corridor);
            }
        }
    }
    corridors
}

/// Cells visited walking from `start` to `end`, excluding `start`.
///
/// Each step moves one unit along every axis that has not reached its target yet,
/// so the path runs diagonally until one axis lines up and then straight.
/// Its length is the larger of the two axis deltas.
pub fn corridor_path(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut row, mut col) = start;
    let steps = (end.0 - start.0).abs().max((end.1 - start.1).abs());
    let mut path = Vec::with_capacity(steps as usize);

    while (row, col) != end {
        row += (end.0 - row).signum();
        col += (end.1 - col).signum();
        path.push((row, col));
    }
    path
}

/// Carve a corridor with a "+" brush so it is at least three cells wide.
pub fn carve_corridor(grid: &mut Grid, start: (i32, i32), end: (i32, i32)) {
    for (row, col) in corridor_path(start, end) {
        grid.set(row, col, TileKind::Empty);
        grid.set(row + 1, col, TileKind::Empty);
        grid.set(row - 1, col, TileKind::Empty);
        grid.set(row, col + 1, TileKind::Empty);
        grid.set(row, col - 1, TileKind::Empty);
    }
}

/// Carve every corridor from its lower-id centroid to its higher-id one.
/// `centroids` must be indexed by region id, as `compute_centroids` returns them.
pub fn carve_corridors(grid: &mut Grid, centroids: &[Centroid], corridors: &[Corridor]) {
    for corridor in corridors {
        let (Some(from), Some(to)) = (centroids.get(corridor.from), centroids.get(corridor.to))
        else {
            continue;
        };
        carve_corridor(grid, from.position(), to.position());
    }
    debug!("carved {} corridors", corridors.len());
}

/// Force the outermost ring of cells to `Wall`, overriding any carving.
pub fn generate_border(grid: &mut Grid) {
    let height = grid.height() as i32;
    let width = grid.width() as i32;
    for row in 0..height {
        grid.set(row, 0, TileKind::Wall);
        grid.set(row, width - 1, TileKind::Wall);
    }
    for col in 0..width {
        grid.set(0, col, TileKind::Wall);
        grid.set(height - 1, col, TileKind::Wall);
    }
}
