//! Generator configuration
//!
//! A plain value passed into `Generator::new`. Defaults reproduce the
//! classic 160×120 layout with twenty candidate rooms.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GenerationError, Result};

/// Tunables for a single generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed of the generator's random source
    pub seed: u64,

    // Grid
    pub width: u32,
    pub height: u32,

    // Rooms
    pub room_count: u32,
    pub room_size_min: u32,
    pub room_size_max: u32,

    // Separation
    pub separation_iterations: u32,
    /// Scale applied to each averaged push, must exceed 1.0
    pub separation_overshoot: f32,

    /// Heuristic multiplier on Empty tiles while carving corridors
    pub empty_tile_weight: u32,

    /// Runs attempted by `Generator::generate` before giving up
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            room_count: MAP_ROOMS,
            room_size_min: ROOM_SIZE_MIN,
            room_size_max: ROOM_SIZE_MAX,
            separation_iterations: SEPARATION_ITERS,
            separation_overshoot: SEPARATION_OVERSHOOT,
            empty_tile_weight: EMPTY_TILE_WEIGHT,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check that a generator can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GenerationError::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "grid dimensions must be non-zero (got {}x{})",
                self.width, self.height
            ));
        }
        // Tile coordinates are i32 in room space and linear indices stay in u32
        if u64::from(self.width) * u64::from(self.height) > u64::from(u32::MAX)
            || self.width > i32::MAX as u32
            || self.height > i32::MAX as u32
        {
            return invalid(format!(
                "grid of {}x{} tiles is too large",
                self.width, self.height
            ));
        }
        if self.room_count == 0 {
            return invalid("room_count must be at least 1".to_string());
        }
        if self.room_size_min == 0 {
            return invalid("room_size_min must be at least 1".to_string());
        }
        if self.room_size_min > self.room_size_max {
            return invalid(format!(
                "room_size_min ({}) exceeds room_size_max ({})",
                self.room_size_min, self.room_size_max
            ));
        }
        if self.room_size_max > self.width || self.room_size_max > self.height {
            return invalid(format!(
                "room_size_max ({}) does not fit a {}x{} grid",
                self.room_size_max, self.width, self.height
            ));
        }
        if !(self.separation_overshoot > 1.0 && self.separation_overshoot.is_finite()) {
            return invalid(format!(
                "separation_overshoot must be a finite value above 1.0 (got {})",
                self.separation_overshoot
            ));
        }
        if self.empty_tile_weight == 0 {
            return invalid("empty_tile_weight must be at least 1".to_string());
        }
        if self.max_attempts == 0 {
            return invalid("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }

    /// Upper bound on `Generator::step` calls needed to reach `Finished`
    ///
    /// One step per room, one per separation pass, one per corridor (a
    /// planar graph has fewer than three edges per room), plus the single
    /// step stages.
    pub fn max_steps(&self) -> u32 {
        self.room_count
            .saturating_mul(4)
            .saturating_add(self.separation_iterations)
            .saturating_add(8)
    }
}
