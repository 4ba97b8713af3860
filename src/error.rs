//! Error types for the snowfall engine.
//!
//! Only construction can fail. A running simulation never errors: a missing
//! viewport falls back to default dimensions for that step.

use std::fmt;

/// Errors that can occur while building a snowfall.
#[derive(Debug, Clone, PartialEq)]
pub enum SnowError {
    /// Population size of zero.
    EmptyPopulation,
    /// Seeding viewport is too small or not finite.
    InvalidViewport { width: f32, height: f32 },
    /// A tunable is NaN or infinite.
    InvalidParameter { name: &'static str, value: f32 },
}

impl fmt::Display for SnowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnowError::EmptyPopulation => write!(f, "Particle count must be at least 1"),
            SnowError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport {}x{}: both dimensions must be finite and >= 1", width, height)
            }
            SnowError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
        }
    }
}

impl std::error::Error for SnowError {}

impl From<SnowError> for wasm_bindgen::JsValue {
    fn from(e: SnowError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
