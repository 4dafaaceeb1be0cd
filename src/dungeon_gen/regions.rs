//! Connected-component labeling of open cells, and one centroid per component.

use std::collections::VecDeque;

use log::{debug, warn};

use super::occupancy::OccupancyMap;
use crate::error::GenerationWarning;

const NEIGHBORS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A maximal 4-connected set of open cells. Treated as one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: usize,
    /// Member cells as `(row, col)`, in the order the flood fill reached them
    pub cells: Vec<(i32, i32)>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The full partition of open cells into regions, plus a per-cell label lookup.
#[derive(Debug, Clone)]
pub struct RegionMap {
    height: usize,
    width: usize,
    labels: Vec<Option<usize>>,
    regions: Vec<Region>,
}

impl RegionMap {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Id of the region containing `(row, col)`, or `None` for closed or out-of-range cells.
    pub fn region_of(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        self.labels[row as usize * self.width + col as usize]
    }
}

/// Label every open cell with a region id.
///
/// Cells are scanned in row-major order; the first unlabeled open cell found starts
/// a new region, which is then grown breadth-first through 4-connected open cells.
/// Ids therefore follow scan order, and each cell is labeled exactly once.
pub fn detect_regions(map: &OccupancyMap) -> RegionMap {
    let height = map.height();
    let width = map.width();
    let mut labels: Vec<Option<usize>> = vec![None; height * width];
    let mut regions: Vec<Region> = Vec::new();
    let mut queue = VecDeque::new();

    for row in 0..height as i32 {
        for col in 0..width as i32 {
            let idx = row as usize * width + col as usize;
            if !map.is_open(row, col) || labels[idx].is_some() {
                continue;
            }

            let id = regions.len();
            let mut cells = Vec::new();
            labels[idx] = Some(id);
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                cells.push((r, c));

                for (dr, dc) in NEIGHBORS {
                    let (nr, nc) = (r + dr, c + dc);
                    // is_open is false outside the map, so the index below is in range
                    if !map.is_open(nr, nc) {
                        continue;
                    }
                    let n_idx = nr as usize * width + nc as usize;
                    if labels[n_idx].is_none() {
                        labels[n_idx] = Some(id);
                        queue.push_back((nr, nc));
                    }
                }
            }

            regions.push(Region { id, cells });
        }
    }

    debug!("flood fill found {} regions", regions.len());
    RegionMap {
        height,
        width,
        labels,
        regions,
    }
}

/// Integer-rounded mean position of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Centroid {
    pub region: usize,
    pub row: i32,
    pub col: i32,
}

impl Centroid {
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    pub fn distance_to(&self, other: &Centroid) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

/// Rounds half away from zero.
fn region_centroid(region: &Region) -> Centroid {
    let count = region.cells.len().max(1) as f64;
    let (sum_row, sum_col) = region
        .cells
        .iter()
        .fold((0i64, 0i64), |(sr, sc), (r, c)| (sr + *r as i64, sc + *c as i64));
    Centroid {
        region: region.id,
        row: (sum_row as f64 / count).round() as i32,
        col: (sum_col as f64 / count).round() as i32,
    }
}

/// One centroid per region, in region id order.
pub fn compute_centroids(regions: &RegionMap) -> Vec<Centroid> {
    regions.regions().iter().map(region_centroid).collect()
}

/// Report centroids that landed on a closed cell. Irregular regions (a ring around
/// a pillar, say) can have their mean fall outside themselves. Generation continues;
/// the room box carved around the centroid still yields a usable room.
pub fn find_degenerate_centroids(
    centroids: &[Centroid],
    map: &OccupancyMap,
) -> Vec<GenerationWarning> {
    centroids
        .iter()
        .filter(|c| !map.is_open(c.row, c.col))
        .map(|c| {
            let warning = GenerationWarning::DegenerateCentroid {
                region: c.region,
                row: c.row,
                col: c.col,
            };
            warn!("{}", warning);
            warning
        })
        .collect()
}
