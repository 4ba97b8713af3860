// viewport.rs - Drawable area queries
//
// The simulation never talks to a display. Whoever drives it hands in a
// ViewportProvider; when that has no answer, the step runs at the default
// resolution instead.

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Drawable width and height in screen units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const FALLBACK: Self = Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// At least one whole unit on each axis, and finite
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 1.0 && self.height >= 1.0
    }
}

/// Source of the current viewport size. `None` means unavailable.
pub trait ViewportProvider {
    fn viewport_size(&self) -> Option<Bounds>;
}

impl ViewportProvider for Bounds {
    fn viewport_size(&self) -> Option<Bounds> {
        self.is_usable().then_some(*self)
    }
}

impl ViewportProvider for Option<Bounds> {
    fn viewport_size(&self) -> Option<Bounds> {
        self.and_then(|b| b.viewport_size())
    }
}

/// Provider that never answers; every step uses the fallback
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl ViewportProvider for Unavailable {
    fn viewport_size(&self) -> Option<Bounds> {
        None
    }
}

/// Query the provider once. Falls back to 1600x1200 for this call only.
pub fn resolve<V: ViewportProvider + ?Sized>(provider: &V) -> Bounds {
    match provider.viewport_size() {
        Some(bounds) if bounds.is_usable() => bounds,
        _ => {
            log::debug!("viewport unavailable, using {}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);
            Bounds::FALLBACK
        }
    }
}
