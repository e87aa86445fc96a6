//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - Time comes in as an argument, never from a clock
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use camera::{BackgroundLayout, Camera};
pub use collision::{find_landing, resolve_platforms, rest_on_ground};
pub use level::{generate_coins, generate_platforms};
pub use rect::Rect;
pub use state::{Character, Coin, GameEvent, GameState, Platform, Screen, start_button_rect};
pub use tick::{TickInput, tick};
