//! Generator defaults

/// Grid width in tiles
pub const MAP_WIDTH: u32 = 160;

/// Grid height in tiles
pub const MAP_HEIGHT: u32 = 120;

/// Number of candidate rooms sampled by CreateRooms
pub const MAP_ROOMS: u32 = 20;

/// Maximum number of separation passes in FitRooms
pub const SEPARATION_ITERS: u32 = 20;

/// Smallest room side (inclusive)
pub const ROOM_SIZE_MIN: u32 = 8;

/// Largest room side (inclusive)
pub const ROOM_SIZE_MAX: u32 = 32;

/// Scale applied to the averaged separation vector
pub const SEPARATION_OVERSHOOT: f32 = 1.1;

/// Corridor heuristic multiplier on tiles that are still Empty
pub const EMPTY_TILE_WEIGHT: u32 = 2;

/// Regeneration budget of `Generator::generate`
pub const MAX_ATTEMPTS: u32 = 8;

/// Multiple of the bounding box used to size the Delaunay super-triangle
pub const SUPER_TRIANGLE_SCALE: f32 = 20.0;
