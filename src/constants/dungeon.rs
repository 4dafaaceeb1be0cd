//! Level generation constants.

/// Default level width in cells
pub const DUNGEON_DEFAULT_WIDTH: usize = 64;
/// Default level height in cells
pub const DUNGEON_DEFAULT_HEIGHT: usize = 64;
/// Largest width or height accepted by config validation
pub const MAX_DIMENSION: usize = 4096;

/// Spatial frequency of the noise field (lattice cells across the level)
pub const NOISE_DEFAULT_SCALE: f64 = 15.0;
/// Samples above this value become open cells
pub const NOISE_DEFAULT_SENSITIVITY: f64 = 0.07;
/// Noise offsets are drawn from `0.0..NOISE_OFFSET_RANGE` so each run samples a different area
pub const NOISE_OFFSET_RANGE: f64 = 9999.0;

/// Smallest half-extent of a carved room box (inclusive)
pub const ROOM_MIN_HALF_EXTENT: i32 = 4;
/// Largest half-extent of a carved room box (exclusive)
pub const ROOM_MAX_HALF_EXTENT: i32 = 6;

/// Rooms needed before objects can be placed
pub const REQUIRED_ROOMS: usize = 6;

/// How many times the binary regenerates with a fresh seed after a hard failure
pub const MAX_GENERATION_ATTEMPTS: u32 = 8;
