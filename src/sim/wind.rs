// wind.rs - Global wind shared by every flake
//
// Holds a value for WIND_CHANGE_INTERVAL ticks, then resamples it.
// Occasionally the new value is amplified into a gust.

use rand::Rng;

use crate::config::{GUST_CHANCE, GUST_FACTOR, WIND_CHANGE_INTERVAL, WIND_RANGE};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wind {
    pub force: f32,
    pub ticks_since_change: u32,
}

impl Wind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick; resample once the interval has passed.
    /// Returns true when the force changed this tick.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.ticks_since_change += 1;
        if self.ticks_since_change <= WIND_CHANGE_INTERVAL {
            return false;
        }

        // 200 steps across [-range, range)
        let step = rng.gen_range(0..200i32) - 100;
        self.force = step as f32 / 100.0 * WIND_RANGE;
        self.ticks_since_change = 0;

        let gust = rng.gen_range(0..GUST_CHANCE) == 0;
        if gust {
            self.force *= GUST_FACTOR;
        }

        log::debug!("wind changed to {:.3}{}", self.force, if gust { " (gust)" } else { "" });
        true
    }
}
