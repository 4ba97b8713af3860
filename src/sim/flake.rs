// flake.rs - A single falling snowflake
//
// Forces accumulate into `acceleration` between updates and are consumed
// (then cleared) by `update`. Depth scales both fall speed and sprite size.

use rand::Rng;

use crate::config::{HORIZONTAL_MARGIN, MIN_DEPTH, OSCILLATION_AMPLITUDE, OSCILLATION_FREQUENCY};
use crate::math::Vector2;
use crate::viewport::{self, Bounds, ViewportProvider};

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub position: Vector2,
    pub velocity: Vector2,
    acceleration: Vector2,

    // Fixed at creation
    size: f32,
    oscillation_offset: f32,
    depth: f32,     // 0.1 = near, 10 = far
}

impl Snowflake {
    /// New flake at (x, y) with randomized motion and looks.
    /// Coordinates may lie off-screen, negative x included.
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let velocity = Vector2::new(
            rng.gen_range(0..2i32) as f32 - 1.0,
            rng.gen_range(1..=2i32) as f32,
        );
        let size = rng.gen_range(6..=8i32) as f32;
        let oscillation_offset = rng.gen_range(0..360i32) as f32;
        let depth = rng.gen_range(1..=100i32) as f32 / 10.0;

        Self::with_attributes(Vector2::new(x, y), velocity, size, oscillation_offset, depth)
    }

    pub fn with_attributes(
        position: Vector2,
        velocity: Vector2,
        size: f32,
        oscillation_offset: f32,
        depth: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
            size,
            oscillation_offset,
            depth: guard_depth(depth),
        }
    }

    #[inline]
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration.accumulate(force);
    }

    /// Advance one step inside already-resolved bounds.
    pub fn update<R: Rng + ?Sized>(&mut self, delta_time: f32, wind_force: f32, bounds: Bounds, rng: &mut R) {
        let oscillation = ((self.position.y + self.oscillation_offset) * OSCILLATION_FREQUENCY).sin()
            * OSCILLATION_AMPLITUDE;

        // x is overwritten each step, so horizontal forces never reach it
        self.velocity.x = wind_force + oscillation;
        self.velocity.y += self.acceleration.y * delta_time * (1.0 / self.depth);

        self.position += self.velocity * delta_time;
        self.acceleration = Vector2::ZERO;

        if self.position.y > bounds.height {
            self.recycle(bounds.width, rng);
        }

        if self.position.x < -HORIZONTAL_MARGIN {
            self.position.x = bounds.width + HORIZONTAL_MARGIN;
        } else if self.position.x > bounds.width + HORIZONTAL_MARGIN {
            self.position.x = -HORIZONTAL_MARGIN;
        }
    }

    /// Advance one step, asking `viewport` for the bounds first.
    pub fn update_with<V, R>(&mut self, delta_time: f32, wind_force: f32, viewport: &V, rng: &mut R)
    where
        V: ViewportProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let bounds = viewport::resolve(viewport);
        self.update(delta_time, wind_force, bounds, rng);
    }

    /// Back to the top at a random column with fresh velocity
    fn recycle<R: Rng + ?Sized>(&mut self, width: f32, rng: &mut R) {
        self.position.y = 0.0;
        self.position.x = rng.gen_range(0..(width as u32).max(1)) as f32;
        self.velocity = Vector2::new(
            rng.gen_range(-1..=1i32) as f32,
            rng.gen_range(1..=3i32) as f32,
        );
    }

    #[inline]
    pub fn acceleration(&self) -> Vector2 { self.acceleration }
    #[inline]
    pub fn size(&self) -> f32 { self.size }
    #[inline]
    pub fn oscillation_offset(&self) -> f32 { self.oscillation_offset }
    #[inline]
    pub fn depth(&self) -> f32 { self.depth }

    /// Side of the square sprite: farther flakes draw smaller
    #[inline]
    pub fn render_side(&self) -> f32 {
        self.size / self.depth
    }
}

#[inline]
fn guard_depth(depth: f32) -> f32 {
    // f32::max discards NaN
    depth.max(MIN_DEPTH)
}
