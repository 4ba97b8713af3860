// sim/ - Snowfall simulation
//
// A fixed population of flakes plus the global wind. One `step_all` per
// frame: wind first, then every flake in population order.

mod flake;
mod rng;
mod wind;

pub use flake::Snowflake;
pub use rng::XorShift32;
pub use wind::Wind;

use rand::Rng;

use crate::config::{SEED_OVERSCAN, SnowConfig};
use crate::error::SnowError;
use crate::math::Vector2;
use crate::viewport::{self, Bounds, ViewportProvider};

/// Snowfall simulation world
pub struct Snowfall<R: Rng = XorShift32> {
    flakes: Vec<Snowflake>,
    wind: Wind,
    config: SnowConfig,
    rng: R,
}

impl<R: Rng> Snowfall<R> {
    /// Scatter `config.particle_count` flakes over a band wider than the
    /// viewport, so the first frame already looks mid-fall.
    pub fn seed(config: SnowConfig, bounds: Bounds, mut rng: R) -> Result<Self, SnowError> {
        config.validate()?;
        if !bounds.is_usable() {
            return Err(SnowError::InvalidViewport { width: bounds.width, height: bounds.height });
        }

        // `as` saturates at u32::MAX; keep the overscan add from wrapping
        let band = (bounds.width as u32).saturating_add(2 * SEED_OVERSCAN);
        let rows = bounds.height as u32;

        let flakes = (0..config.particle_count)
            .map(|_| {
                let x = rng.gen_range(0..band) as f32 - SEED_OVERSCAN as f32;
                let y = rng.gen_range(0..rows) as f32;
                Snowflake::spawn(x, y, &mut rng)
            })
            .collect();

        log::info!(
            "seeded {} flakes over {}x{}",
            config.particle_count,
            bounds.width,
            bounds.height
        );

        Ok(Self {
            flakes,
            wind: Wind::new(),
            config,
            rng,
        })
    }

    /// Wrap an existing population. Used to replay known states.
    pub fn from_flakes(flakes: Vec<Snowflake>, config: SnowConfig, rng: R) -> Result<Self, SnowError> {
        config.validate()?;
        if flakes.is_empty() {
            return Err(SnowError::EmptyPopulation);
        }
        Ok(Self {
            flakes,
            wind: Wind::new(),
            config,
            rng,
        })
    }

    /// Advance wind once, then every flake once.
    pub fn step_all<V: ViewportProvider + ?Sized>(&mut self, delta_time: f32, viewport: &V) {
        self.wind.advance(&mut self.rng);

        let bounds = viewport::resolve(viewport);
        let gravity = Vector2::new(0.0, self.config.gravity);
        let wind_force = self.wind.force;

        for flake in &mut self.flakes {
            flake.apply_force(gravity);
            flake.update(delta_time, wind_force, bounds, &mut self.rng);
        }
    }

    /// `step_all` with the configured delta
    pub fn tick<V: ViewportProvider + ?Sized>(&mut self, viewport: &V) {
        self.step_all(self.config.delta_time, viewport);
    }

    pub fn flakes(&self) -> &[Snowflake] { &self.flakes }
    pub fn wind(&self) -> Wind { self.wind }
    pub fn len(&self) -> usize { self.flakes.len() }
    pub fn is_empty(&self) -> bool { self.flakes.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PARTICLE_COUNT, GRAVITY, MIN_DEPTH};
    use crate::viewport::Unavailable;
    use super::rng::Scripted;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEW: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn test_seed_population_in_band() {
        let sim = Snowfall::seed(SnowConfig::default(), VIEW, XorShift32::new(5)).unwrap();
        assert_eq!(sim.len(), DEFAULT_PARTICLE_COUNT);
        for f in sim.flakes() {
            assert!(f.position.x >= -400.0 && f.position.x < 800.0 + 400.0);
            assert!(f.position.y >= 0.0 && f.position.y < 600.0);
        }
        assert!(sim.flakes().iter().any(|f| f.position.x < 0.0));
    }

    #[test]
    fn test_seed_rejects_bad_input() {
        let rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            Snowfall::seed(SnowConfig::with_count(0), VIEW, rng.clone()).err(),
            Some(SnowError::EmptyPopulation)
        );
        assert!(matches!(
            Snowfall::seed(SnowConfig::default(), Bounds::new(0.0, 600.0), rng),
            Err(SnowError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_seed_huge_viewport_does_not_overflow() {
        let wide = Bounds::new(u32::MAX as f32, 600.0);
        let mut sim = Snowfall::seed(SnowConfig::with_count(64), wide, SmallRng::seed_from_u64(13)).unwrap();
        for f in sim.flakes() {
            assert!(f.position.x >= -400.0);
            assert!(f.position.x <= u32::MAX as f32);
            assert!(f.position.y >= 0.0 && f.position.y < 600.0);
        }
        sim.step_all(1.0, &wide);
        assert_eq!(sim.len(), 64);
    }

    #[test]
    fn test_seed_draw_mapping() {
        // band = 800 + 2 * 400; then the five spawn draws
        let rng = Scripted::new(&[(0, 1600), (599, 600), (1, 2), (0, 2), (1, 3), (90, 360), (24, 100)]);
        let sim = Snowfall::seed(SnowConfig::with_count(1), VIEW, rng).unwrap();
        let f = &sim.flakes()[0];
        assert_eq!(f.position, Vector2::new(-400.0, 599.0));
        assert_eq!(f.velocity, Vector2::new(0.0, 1.0));
        assert_eq!(f.size(), 7.0);
        assert_eq!(f.oscillation_offset(), 90.0);
        assert_eq!(f.depth(), 2.5);
    }

    #[test]
    fn test_depth_stays_positive_over_time() {
        let mut sim = Snowfall::seed(SnowConfig::default(), VIEW, SmallRng::seed_from_u64(8)).unwrap();
        for _ in 0..600 {
            sim.step_all(1.0, &VIEW);
            assert!(sim.flakes().iter().all(|f| f.depth() >= MIN_DEPTH));
            assert!(sim.flakes().iter().all(|f| f.acceleration() == Vector2::ZERO));
        }
    }

    #[test]
    fn test_population_stays_on_the_band() {
        let mut sim = Snowfall::seed(SnowConfig::default(), VIEW, SmallRng::seed_from_u64(21)).unwrap();
        for _ in 0..1000 {
            sim.step_all(1.0, &VIEW);
        }
        assert_eq!(sim.len(), DEFAULT_PARTICLE_COUNT);
        for f in sim.flakes() {
            assert!(f.position.y >= 0.0 && f.position.y <= 600.0);
            assert!(f.position.x >= -50.0 && f.position.x <= 850.0);
        }
    }

    #[test]
    fn test_wind_advances_once_per_step() {
        let mut sim = Snowfall::seed(SnowConfig::with_count(1), VIEW, SmallRng::seed_from_u64(2)).unwrap();
        for _ in 0..180 {
            sim.step_all(1.0, &VIEW);
        }
        assert_eq!(sim.wind().ticks_since_change, 180);
        sim.step_all(1.0, &VIEW);
        assert_eq!(sim.wind().ticks_since_change, 0);
        assert!((-2.0..=2.0).contains(&sim.wind().force));
    }

    #[test]
    fn test_every_flake_sees_the_same_wind() {
        // Same y and offset means same sway, so x velocity differs only by wind
        let flakes = (0..4)
            .map(|i| {
                Snowflake::with_attributes(
                    Vector2::new(100.0 * i as f32, 0.0),
                    Vector2::new(0.0, 1.0),
                    6.0,
                    0.0,
                    1.0 + i as f32,
                )
            })
            .collect();
        let mut sim = Snowfall::from_flakes(flakes, SnowConfig::default(), SmallRng::seed_from_u64(4)).unwrap();
        sim.step_all(1.0, &VIEW);
        let vx = sim.flakes()[0].velocity.x;
        assert!(sim.flakes().iter().all(|f| f.velocity.x == vx));
    }

    #[test]
    fn test_gravity_applied_every_step() {
        let flake = Snowflake::with_attributes(Vector2::new(100.0, 50.0), Vector2::new(0.0, 1.0), 6.0, 0.0, 1.0);
        let mut sim = Snowfall::from_flakes(vec![flake], SnowConfig::default(), SmallRng::seed_from_u64(4)).unwrap();
        sim.step_all(1.0, &VIEW);
        sim.step_all(1.0, &VIEW);
        let f = &sim.flakes()[0];
        assert!((f.velocity.y - (1.0 + 2.0 * GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let run = || {
            let mut sim = Snowfall::seed(SnowConfig::with_count(1), VIEW, XorShift32::new(1234)).unwrap();
            let mut trail = Vec::new();
            for _ in 0..400 {
                sim.tick(&VIEW);
                let f = &sim.flakes()[0];
                trail.push((f.position.x.to_bits(), f.position.y.to_bits(), f.velocity.y.to_bits()));
            }
            trail
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_step_survives_missing_viewport() {
        let mut sim = Snowfall::seed(SnowConfig::with_count(50), VIEW, SmallRng::seed_from_u64(6)).unwrap();
        for _ in 0..2000 {
            sim.step_all(1.0, &Unavailable);
        }
        for f in sim.flakes() {
            assert!(f.position.y <= 1200.0);
            assert!(f.position.x >= -50.0 && f.position.x <= 1650.0);
        }
    }
}
