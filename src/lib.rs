//! Coin Hopper - A side-scrolling coin collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level generation, camera)
//! - `renderer`: 2D canvas rendering behind a `Surface` trait
//! - `platform`: Browser input sampling and frame timing
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (LocalStorage on web)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Physics constants are expressed per tick at this rate.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Camera dead-zone margin as a fraction of viewport width
    pub const DEAD_ZONE_FRACTION: f32 = 0.2;
    /// Background scroll speed relative to the camera
    pub const PARALLAX_FACTOR: f32 = 0.5;

    /// Coin bob height (pixels)
    pub const COIN_FLOAT_AMPLITUDE: f32 = 10.0;
    /// Coin bob phase speed (radians per millisecond)
    pub const COIN_FLOAT_SPEED: f64 = 0.01;

    /// The ground strip holds the character this many sizes above its top edge
    pub const GROUND_SNAP_SCALE: f32 = 1.25;

    /// Start button dimensions on the intro screen
    pub const START_BUTTON_WIDTH: f32 = 150.0;
    pub const START_BUTTON_HEIGHT: f32 = 50.0;
    /// Start button top edge as a fraction of canvas height
    pub const START_BUTTON_Y_FRACTION: f32 = 0.7;

    pub const TITLE_TEXT: &str = "DOG ETH BTC";
    pub const CREDITS_TEXT: &str = "Created by: Kristofer Lund";
}

/// Vertical bob used by titles and banners, `amplitude * sin(now / period)`
#[inline]
pub fn bob(now_ms: f64, amplitude: f32, period_ms: f64) -> f32 {
    amplitude * (now_ms / period_ms).sin() as f32
}
