//! Noise-driven level generation.
//!
//! The pipeline runs top to bottom, each stage reading only what earlier stages produced:
//! noise field, wall fill, region detection, centroids, room boxes, corridors,
//! outer border, object placement.

mod carving;
mod occupancy;
mod placement;
mod regions;

pub use carving::{
    carve_corridor, carve_corridors, carve_rooms, corridor_path, find_corridors, generate_border,
    Corridor,
};
pub use occupancy::{fill_walls, generate_occupancy, OccupancyMap};
pub use placement::{
    apply_placements, ensure_enough_rooms, place_objects, plan_placements, Placements,
};
pub use regions::{
    compute_centroids, detect_regions, find_degenerate_centroids, Centroid, Region, RegionMap,
};

use log::{debug, info};

use crate::config::LevelConfig;
use crate::error::{GenerationError, GenerationWarning};
use crate::grid::{Grid, Level};
use crate::rng::LevelRng;

/// Result of level generation
#[derive(Debug, Clone)]
pub struct DungeonResult {
    pub level: Level,
    /// Seed that reproduces this level
    pub seed: u64,
    /// One per detected region, indexed by region id
    pub centroids: Vec<Centroid>,
    pub corridors: Vec<Corridor>,
    pub placements: Placements,
    pub warnings: Vec<GenerationWarning>,
}

pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Generate a level. Without a configured seed the wall clock picks one;
    /// either way the seed used is reported in the result.
    pub fn generate(config: &LevelConfig) -> Result<DungeonResult, GenerationError> {
        config.validate()?;
        let mut rng = LevelRng::from_optional_seed(config.seed);
        let map = generate_occupancy(
            config.height,
            config.width,
            config.noise_scale,
            config.noise_sensitivity,
            &mut rng,
        );
        Self::generate_from_occupancy(config, &map, &mut rng)
    }

    /// Run everything after the noise stage on a given occupancy map.
    /// The level takes the map's dimensions; the rest of `config` applies as usual.
    pub fn generate_from_occupancy(
        config: &LevelConfig,
        map: &OccupancyMap,
        rng: &mut LevelRng,
    ) -> Result<DungeonResult, GenerationError> {
        config.validate()?;

        let regions = detect_regions(map);
        if regions.is_empty() {
            return Err(GenerationError::NoRegionsDetected);
        }

        let centroids = compute_centroids(&regions);
        let warnings = find_degenerate_centroids(&centroids, map);
        // Fail before building any grid state
        ensure_enough_rooms(&centroids, map.height(), map.width(), config.required_rooms)?;

        let mut grid = Grid::new(map.height(), map.width());
        fill_walls(map, &mut grid);
        carve_rooms(&centroids, &mut grid, config.room_half_extent, rng);

        let threshold = config.corridor_threshold_for(map.height(), map.width());
        let corridors = find_corridors(&centroids, threshold);
        carve_corridors(&mut grid, &centroids, &corridors);

        generate_border(&mut grid);

        let placements = place_objects(&mut grid, &centroids, config.required_rooms, rng)?;

        info!(
            "generated {}x{} level (seed {}): {} regions, {} corridors, {} warnings",
            grid.height(),
            grid.width(),
            rng.seed(),
            regions.len(),
            corridors.len(),
            warnings.len()
        );

        Ok(DungeonResult {
            level: grid.into_level(),
            seed: rng.seed(),
            centroids,
            corridors,
            placements,
            warnings,
        })
    }

    /// Regenerate wholesale after retryable failures, up to `max_attempts` times.
    ///
    /// With a configured seed every attempt would repeat the same level, so only one is made.
    /// Otherwise each attempt offsets the clock-derived seed by the attempt number.
    pub fn generate_with_retries(
        config: &LevelConfig,
        max_attempts: u32,
    ) -> Result<DungeonResult, GenerationError> {
        if config.seed.is_some() {
            return Self::generate(config);
        }

        let base_seed = LevelRng::from_clock().seed();
        let mut attempt = 0;
        loop {
            let seeded = config.clone().with_seed(base_seed.wrapping_add(attempt as u64));
            match Self::generate(&seeded) {
                Err(err) if err.is_retryable() && attempt + 1 < max_attempts => {
                    debug!("attempt {} failed: {}", attempt + 1, err);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
