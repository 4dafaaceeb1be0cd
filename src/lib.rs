//! Procedural dungeon levels from thresholded Perlin noise.
//!
//! [`DungeonGenerator::generate`] turns a [`LevelConfig`] into a finished [`Level`]:
//! a grid of [`TileKind`] with walls, box rooms, corridors and the placed objects.

pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod grid;
pub mod rng;
pub mod tile;

pub use config::LevelConfig;
pub use dungeon_gen::{DungeonGenerator, DungeonResult};
pub use error::{ConfigError, GenerationError, GenerationWarning};
pub use grid::{Grid, Level};
pub use rng::LevelRng;
pub use tile::TileKind;
