//! Platform abstraction layer
//!
//! Handles the browser side of the loop without touching the DOM directly:
//! - Input events folded into per-tick commands
//! - Frame timing (fixed-step accumulator, FPS estimate)

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::FrameClock;
