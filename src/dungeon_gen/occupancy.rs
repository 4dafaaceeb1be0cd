//! Thresholded noise field: the open/closed classification every later stage builds on.

use log::debug;
use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::constants::NOISE_OFFSET_RANGE;
use crate::grid::Grid;
use crate::tile::TileKind;

/// Binary open/closed map with the same dimensions as the level.
/// `true` marks an open candidate, `false` a wall candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    height: usize,
    width: usize,
    open: Vec<bool>,
}

impl OccupancyMap {
    /// A map with every cell closed
    pub fn closed(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            open: vec![false; height * width],
        }
    }

    /// Build a map from text rows: `.` is open, anything else is closed.
    /// The first row sets the width; short rows are padded with closed cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut map = Self::closed(height, width);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(width).enumerate() {
                map.open[row * width + col] = ch == '.';
            }
        }
        map
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells outside the map count as closed.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return false;
        }
        self.open[row as usize * self.width + col as usize]
    }

    pub fn set_open(&mut self, row: usize, col: usize, open: bool) {
        if row < self.height && col < self.width {
            self.open[row * self.width + col] = open;
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }
}

/// Sample Perlin noise once per cell and threshold it.
///
/// Cell `(i, j)` is open when `noise(i / height * scale + ox, j / width * scale + oy)`
/// exceeds `sensitivity`. The offsets are drawn from `rng` so each run looks at a
/// different patch of the noise field.
///
/// `noise::Perlin` samples lie roughly in `[-1, 1]`, so a `sensitivity` in `[0, 1)`
/// leaves a bit under half the cells open at the default of 0.07.
pub fn generate_occupancy(
    height: usize,
    width: usize,
    scale: f64,
    sensitivity: f64,
    rng: &mut impl Rng,
) -> OccupancyMap {
    let perlin = Perlin::default();
    let offset_x = rng.gen_range(0.0..NOISE_OFFSET_RANGE);
    let offset_y = rng.gen_range(0.0..NOISE_OFFSET_RANGE);

    let mut map = OccupancyMap::closed(height, width);
    for i in 0..height {
        for j in 0..width {
            let nx = i as f64 / height as f64 * scale + offset_x;
            let ny = j as f64 / width as f64 * scale + offset_y;
            let sample = perlin.get([nx, ny]);
            map.set_open(i, j, sample > sensitivity);
        }
    }

    debug!(
        "noise field {}x{}: {} open cells (offset {:.2}, {:.2})",
        height,
        width,
        map.open_count(),
        offset_x,
        offset_y
    );
    map
}

/// Turn every closed cell into a wall. Open cells keep whatever the grid already holds.
pub fn fill_walls(map: &OccupancyMap, grid: &mut Grid) {
    for row in 0..map.height() as i32 {
        for col in 0..map.width() as i32 {
            if !map.is_open(row, col) {
                grid.set(row, col, TileKind::Wall);
            }
        }
    }
}
