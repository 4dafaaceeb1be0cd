//! Placement of the singleton gameplay objects on room centroids.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::regions::Centroid;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::tile::TileKind;

/// Where each object ended up, as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placements {
    pub player: (i32, i32),
    pub dagger: (i32, i32),
    pub end: (i32, i32),
    /// Orthogonal neighbors of `end` inside the border
    pub doors: Vec<(i32, i32)>,
    pub enemy: (i32, i32),
    pub key: (i32, i32),
}

/// Whether `(row, col)` lies strictly inside the outer wall ring of a `height` x `width` grid.
fn is_interior(row: i32, col: i32, height: usize, width: usize) -> bool {
    row >= 1 && col >= 1 && (row as i64) < height as i64 - 1 && (col as i64) < width as i64 - 1
}

/// Distinct centroid positions in region id order, pulled inside the border ring.
/// Centroids that coincide after clamping count once. Grids without an interior give no positions.
fn placement_pool(centroids: &[Centroid], height: usize, width: usize) -> Vec<(i32, i32)> {
    if height < 3 || width < 3 {
        return Vec::new();
    }
    let max_row = (height - 2) as i32;
    let max_col = (width - 2) as i32;
    let mut seen = HashSet::new();
    centroids
        .iter()
        .map(|c| (c.row.clamp(1, max_row), c.col.clamp(1, max_col)))
        .filter(|pos| seen.insert(*pos))
        .collect()
}

/// Fails with `InsufficientRooms` when fewer than `required` distinct placement
/// positions exist on a `height` x `width` level.
pub fn ensure_enough_rooms(
    centroids: &[Centroid],
    height: usize,
    width: usize,
    required: usize,
) -> Result<(), GenerationError> {
    let found = placement_pool(centroids, height, width).len();
    if found < required {
        return Err(GenerationError::InsufficientRooms { found, required });
    }
    Ok(())
}

fn draw(
    pool: &mut Vec<(i32, i32)>,
    rng: &mut impl Rng,
    found: usize,
    required: usize,
) -> Result<(i32, i32), GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::InsufficientRooms { found, required });
    }
    let idx = rng.gen_range(0..pool.len());
    Ok(pool.remove(idx))
}

/// Choose a distinct centroid for each object without touching the grid.
///
/// Roles are drawn in a fixed order (player, dagger, exit, enemy, key), each one
/// removing its centroid from the pool. Every object and door stays off the outer
/// wall ring. The door ring never covers the player or the dagger, and the enemy
/// and key are never drawn onto a door.
pub fn plan_placements(
    centroids: &[Centroid],
    grid: &Grid,
    required: usize,
    rng: &mut impl Rng,
) -> Result<Placements, GenerationError> {
    let (height, width) = (grid.height(), grid.width());
    let mut pool = placement_pool(centroids, height, width);
    let found = pool.len();
    if found < required {
        return Err(GenerationError::InsufficientRooms { found, required });
    }

    let player = draw(&mut pool, rng, found, required)?;
    let dagger = draw(&mut pool, rng, found, required)?;
    let end = draw(&mut pool, rng, found, required)?;

    let (row, col) = end;
    let doors: Vec<(i32, i32)> = [(row + 1, col), (row - 1, col), (row, col + 1), (row, col - 1)]
        .into_iter()
        .filter(|&(r, c)| is_interior(r, c, height, width))
        .filter(|pos| *pos != player && *pos != dagger)
        .collect();
    pool.retain(|pos| !doors.contains(pos));

    let enemy = draw(&mut pool, rng, found, required)?;
    let key = draw(&mut pool, rng, found, required)?;

    Ok(Placements {
        player,
        dagger,
        end,
        doors,
        enemy,
        key,
    })
}

/// Write planned objects into the grid. Out-of-range positions are skipped.
pub fn apply_placements(grid: &mut Grid, placements: &Placements) {
    let mut writes = vec![
        (placements.player, TileKind::Player),
        (placements.dagger, TileKind::Dagger),
    ];
    writes.extend(placements.doors.iter().map(|&door| (door, TileKind::Door)));
    writes.push((placements.end, TileKind::End));
    writes.push((placements.enemy, TileKind::Enemy));
    writes.push((placements.key, TileKind::Key));

    for ((row, col), kind) in writes {
        grid.fill_block(row, col, 1, 1, kind);
    }
}

/// Place the player, dagger, locked exit, enemy and key.
///
/// Fails with `InsufficientRooms` before writing anything when fewer than
/// `required` distinct centroids are available.
pub fn place_objects(
    grid: &mut Grid,
    centroids: &[Centroid],
    required: usize,
    rng: &mut impl Rng,
) -> Result<Placements, GenerationError> {
    let placements = plan_placements(centroids, grid, required, rng)?;
    apply_placements(grid, &placements);
    debug!(
        "placed player at {:?}, exit at {:?} with {} doors",
        placements.player,
        placements.end,
        placements.doors.len()
    );
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::LevelRng;

    fn spread_centroids(count: usize) -> Vec<Centroid> {
        (0..count)
            .map(|i| Centroid {
                region: i,
                row: 5 + (i as i32 / 4) * 10,
                col: 5 + (i as i32 % 4) * 10,
            })
            .collect()
    }

    #[test]
    fn test_three_rooms_is_insufficient() {
        let mut grid = Grid::new(40, 40);
        let before = grid.clone();
        let result = place_objects(&mut grid, &spread_centroids(3), 6, &mut LevelRng::new(1));
        assert_eq!(
            result,
            Err(GenerationError::InsufficientRooms { found: 3, required: 6 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_coincident_centroids_count_once() {
        let mut centroids = spread_centroids(5);
        centroids.push(Centroid { region: 5, row: 5, col: 5 });
        let mut grid = Grid::new(40, 40);
        let result = place_objects(&mut grid, &centroids, 6, &mut LevelRng::new(1));
        assert_eq!(
            result,
            Err(GenerationError::InsufficientRooms { found: 5, required: 6 })
        );
    }

    #[test]
    fn test_each_object_placed_once() {
        for seed in 0..32 {
            let mut grid = Grid::new(40, 40);
            let placements =
                place_objects(&mut grid, &spread_centroids(8), 6, &mut LevelRng::new(seed))
                    .unwrap();
            assert_eq!(grid.count(TileKind::Player), 1);
            assert_eq!(grid.count(TileKind::Dagger), 1);
            assert_eq!(grid.count(TileKind::End), 1);
            assert_eq!(grid.count(TileKind::Enemy), 1);
            assert_eq!(grid.count(TileKind::Key), 1);
            assert_eq!(grid.count(TileKind::Door), 4);
            assert_eq!(placements.doors.len(), 4);
        }
    }

    #[test]
    fn test_objects_use_distinct_centroids() {
        let mut grid = Grid::new(40, 40);
        let p = place_objects(&mut grid, &spread_centroids(6), 6, &mut LevelRng::new(4)).unwrap();
        let positions: HashSet<_> = [p.player, p.dagger, p.end, p.enemy, p.key].into_iter().collect();
        assert_eq!(positions.len(), 5);
    }

    #[test]
    fn test_door_ring_surrounds_end() {
        let mut grid = Grid::new(40, 40);
        let p = place_objects(&mut grid, &spread_centroids(6), 6, &mut LevelRng::new(7)).unwrap();
        let (row, col) = p.end;
        for (r, c) in [(row + 1, col), (row - 1, col), (row, col + 1), (row, col - 1)] {
            assert_eq!(grid.get(r, c), Some(TileKind::Door));
        }
    }

    #[test]
    fn test_door_ring_stays_off_border() {
        let centroids: Vec<Centroid> = (0..6)
            .map(|i| Centroid { region: i, row: 0, col: i as i32 * 3 })
            .collect();
        let mut grid = Grid::new(10, 20);
        let p = place_objects(&mut grid, &centroids, 6, &mut LevelRng::new(3)).unwrap();
        assert_eq!(p.doors.len(), grid.count(TileKind::Door));
        assert!(p.doors.len() < 4);
        assert!(!p.doors.is_empty());
        for &(row, col) in &p.doors {
            assert!(is_interior(row, col, 10, 20), "door at ({}, {})", row, col);
        }
    }

    #[test]
    fn test_border_centroids_are_pulled_inside() {
        let centroids: Vec<Centroid> = [(0, 0), (0, 9), (9, 19), (5, 19), (9, 5), (0, 14)]
            .into_iter()
            .enumerate()
            .map(|(i, (row, col))| Centroid { region: i, row, col })
            .collect();
        for seed in 0..32 {
            let mut grid = Grid::new(10, 20);
            let p = place_objects(&mut grid, &centroids, 6, &mut LevelRng::new(seed)).unwrap();
            for (row, col) in [p.player, p.dagger, p.end, p.enemy, p.key] {
                assert!(is_interior(row, col, 10, 20), "object at ({}, {})", row, col);
            }
            for row in [0, 9] {
                for col in 0..20 {
                    assert_eq!(grid.get(row, col), Some(TileKind::Empty));
                }
            }
        }
    }

    #[test]
    fn test_centroids_merged_by_clamping_count_once() {
        let mut centroids = spread_centroids(5);
        centroids.push(Centroid { region: 5, row: 0, col: 5 });
        centroids.push(Centroid { region: 6, row: 1, col: 5 });
        let result = ensure_enough_rooms(&centroids, 40, 40, 7);
        assert_eq!(
            result,
            Err(GenerationError::InsufficientRooms { found: 6, required: 7 })
        );
    }

    #[test]
    fn test_grid_without_interior_has_no_rooms() {
        let result = ensure_enough_rooms(&spread_centroids(8), 2, 40, 6);
        assert_eq!(
            result,
            Err(GenerationError::InsufficientRooms { found: 0, required: 6 })
        );
    }

    #[test]
    fn test_same_seed_same_placements() {
        let centroids = spread_centroids(10);
        let a = plan_placements(&centroids, &Grid::new(40, 40), 6, &mut LevelRng::new(21)).unwrap();
        let b = plan_placements(&centroids, &Grid::new(40, 40), 6, &mut LevelRng::new(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_enemy_and_key_avoid_doors() {
        // Tightly packed centroids so the exit's ring touches other candidates
        let centroids: Vec<Centroid> = [(5, 5), (5, 6), (5, 4), (4, 5), (6, 5), (20, 20), (30, 30), (25, 25)]
            .into_iter()
            .enumerate()
            .map(|(i, (row, col))| Centroid { region: i, row, col })
            .collect();
        for seed in 0..64 {
            let mut grid = Grid::new(40, 40);
            if let Ok(p) = place_objects(&mut grid, &centroids, 6, &mut LevelRng::new(seed)) {
                assert!(!p.doors.contains(&p.enemy));
                assert!(!p.doors.contains(&p.key));
                assert!(!p.doors.contains(&p.player));
                assert!(!p.doors.contains(&p.dagger));
                assert_eq!(grid.count(TileKind::Player), 1);
                assert_eq!(grid.count(TileKind::Key), 1);
            }
        }
    }
}
