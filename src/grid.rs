use std::fmt;

use crate::tile::TileKind;

/// Mutable tile grid owned by the generator while a level is being built.
///
/// Coordinates are `(row, col)` with row 0 at the top. Every write is clipped to
/// the grid, so callers can hand in coordinates that fall off the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            tiles: vec![TileKind::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    fn get_index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<TileKind> {
        self.get_index(row, col).map(|idx| self.tiles[idx])
    }

    /// Write a tile. Returns false (and writes nothing) when the cell is outside the grid.
    pub fn set(&mut self, row: i32, col: i32, kind: TileKind) -> bool {
        match self.get_index(row, col) {
            Some(idx) => {
                self.tiles[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Fill a `height x width` block whose top-left corner is `(row, col)`.
    pub fn fill_block(&mut self, row: i32, col: i32, height: i32, width: i32, kind: TileKind) {
        for r in row..row + height {
            for c in col..col + width {
                self.set(r, c, kind);
            }
        }
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == kind).count()
    }

    /// Hand the finished grid over as a read-only level.
    pub fn into_level(self) -> Level {
        Level { grid: self }
    }
}

/// A finished level. This is the only view a renderer gets: dimensions plus a tile accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    grid: Grid,
}

impl Level {
    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn tile_at(&self, row: i32, col: i32) -> Option<TileKind> {
        self.grid.get(row, col)
    }

    /// Rows of the level, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.grid.tiles.chunks(self.grid.width.max(1))
    }

    /// Every non-empty cell as `(row, col, kind)` in row-major order.
    /// These are the cells a renderer instantiates something for.
    pub fn non_empty_tiles(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        let width = self.grid.width;
        self.grid
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind != TileKind::Empty)
            .map(move |(idx, kind)| (idx / width, idx % width, *kind))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.grid.count(kind)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|kind| kind.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.count(TileKind::Empty), 24);
    }

    #[test]
    fn test_out_of_bounds_access_is_clipped() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.set(3, 0, TileKind::Wall));
        assert!(!grid.set(0, -1, TileKind::Wall));
        assert_eq!(grid.count(TileKind::Wall), 0);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, TileKind::Key);
        assert_eq!(grid.get(1, 2), Some(TileKind::Key));
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn test_fill_block_clips_at_edges() {
        let mut grid = Grid::new(5, 5);
        grid.fill_block(3, 3, 4, 4, TileKind::Wall);
        assert_eq!(grid.count(TileKind::Wall), 4);
        assert_eq!(grid.get(4, 4), Some(TileKind::Wall));
        assert_eq!(grid.get(2, 2), Some(TileKind::Empty));
    }

    #[test]
    fn test_level_non_empty_tiles() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, TileKind::Wall);
        grid.set(1, 0, TileKind::Player);
        let level = grid.into_level();
        let tiles: Vec<_> = level.non_empty_tiles().collect();
        assert_eq!(tiles, vec![(0, 1, TileKind::Wall), (1, 0, TileKind::Player)]);
    }

    #[test]
    fn test_level_display() {
        let mut grid = Grid::new(2, 3);
        grid.fill_block(0, 0, 1, 3, TileKind::Wall);
        grid.set(1, 1, TileKind::End);
        let level = grid.into_level();
        assert_eq!(level.to_string(), "###\n.>.\n");
    }
}
