use wasm_bindgen::prelude::*;

// ============================================================================
// SNOW WORLD - Falling snow with wind, sway and depth parallax
// ============================================================================

pub mod config;
pub mod error;
pub mod math;
pub mod render;
pub mod sim;
pub mod viewport;

pub use config::SnowConfig;
pub use error::SnowError;
pub use math::Vector2;
pub use sim::{Snowfall, Snowflake, Wind, XorShift32};
pub use viewport::{Bounds, Unavailable, ViewportProvider};

use config::{DEFAULT_PARTICLE_COUNT, FRAME_INTERVAL_MS};
use render::SpriteEncoder;

/// Browser-facing wrapper. JS owns the frame loop and the canvas; it calls
/// `tick` once per frame and draws the sprite buffer.
#[wasm_bindgen]
pub struct SnowWorld {
    sim: Snowfall<XorShift32>,
    viewport: Option<Bounds>,
    sprites: SpriteEncoder,
}

#[wasm_bindgen]
impl SnowWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Result<SnowWorld, JsValue> {
        Self::with_count(DEFAULT_PARTICLE_COUNT as u32, w, h)
    }

    pub fn with_count(count: u32, w: u32, h: u32) -> Result<SnowWorld, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let bounds = Bounds::new(w as f32, h as f32);
        let sim = Snowfall::seed(
            SnowConfig::with_count(count as usize),
            bounds,
            XorShift32::new(entropy_seed()),
        )?;

        let mut sprites = SpriteEncoder::new(sim.len());
        sprites.encode_flakes(sim.flakes());

        Ok(Self {
            sim,
            viewport: Some(bounds),
            sprites,
        })
    }

    pub fn tick(&mut self) {
        self.sim.tick(&self.viewport);
        self.sprites.encode_flakes(self.sim.flakes());
    }

    /// Flakes are kept; only the bounds used by later ticks change.
    /// A zero dimension means "unknown" and ticks use the default size.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.viewport = Some(Bounds::new(w as f32, h as f32));
        log::info!("viewport resized to {}x{}", w, h);
    }

    // Accessors for WASM
    pub fn sprites_ptr(&self) -> *const i32 { self.sprites.ptr() }
    pub fn sprites_len(&self) -> usize { self.sprites.len() }
    pub fn count(&self) -> u32 { self.sim.len() as u32 }
    pub fn wind(&self) -> f32 { self.sim.wind().force }
    pub fn width(&self) -> u32 { viewport::resolve(&self.viewport).width as u32 }
    pub fn height(&self) -> u32 { viewport::resolve(&self.viewport).height as u32 }

    /// Suggested delay between `tick` calls
    pub fn frame_interval_ms() -> u32 { FRAME_INTERVAL_MS }
}

impl SnowWorld {
    pub fn simulation(&self) -> &Snowfall<XorShift32> {
        &self.sim
    }

    pub fn sprites(&self) -> &[i32] {
        self.sprites.as_slice()
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u32 {
    0xDEADBEEF
}
