// config.rs - Simulation constants and tunables
//
// Everything here is fixed for the lifetime of a simulation.

use crate::error::SnowError;

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 500;
pub const SEED_OVERSCAN: u32 = 400;     // extra band on each side at seeding

// Physics
pub const GRAVITY: f32 = 0.005;
pub const TICK: f32 = 1.0;              // one frame, not wall-clock seconds
pub const OSCILLATION_FREQUENCY: f32 = 0.02;
pub const OSCILLATION_AMPLITUDE: f32 = 1.5;
pub const MIN_DEPTH: f32 = 0.1;

// Wind
pub const WIND_CHANGE_INTERVAL: u32 = 180;
pub const WIND_RANGE: f32 = 0.5;
pub const GUST_CHANCE: u32 = 5;         // 1 in N
pub const GUST_FACTOR: f32 = 4.0;

// Viewport
pub const HORIZONTAL_MARGIN: f32 = 50.0;
pub const DEFAULT_WIDTH: f32 = 1600.0;
pub const DEFAULT_HEIGHT: f32 = 1200.0;

/// Advisory frame pacing for the driver loop (~60Hz)
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Tunables for one snowfall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowConfig {
    pub particle_count: usize,
    pub gravity: f32,
    pub delta_time: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            gravity: GRAVITY,
            delta_time: TICK,
        }
    }
}

impl SnowConfig {
    pub fn with_count(particle_count: usize) -> Self {
        Self { particle_count, ..Self::default() }
    }

    /// Reject malformed settings up front instead of clamping them
    pub fn validate(&self) -> Result<(), SnowError> {
        if self.particle_count == 0 {
            return Err(SnowError::EmptyPopulation);
        }
        if !self.gravity.is_finite() {
            return Err(SnowError::InvalidParameter { name: "gravity", value: self.gravity });
        }
        if !self.delta_time.is_finite() {
            return Err(SnowError::InvalidParameter { name: "delta_time", value: self.delta_time });
        }
        Ok(())
    }
}
