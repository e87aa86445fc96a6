//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in `GameState`, so a test
//! can build one, tick it, and throw it away.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::level;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which screen the game is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen with the start button
    Intro,
    /// Active gameplay
    Playing,
    /// Every coin collected. Play continues underneath the banner.
    LevelComplete,
}

impl Screen {
    /// True once the start button has been clicked
    pub fn is_started(self) -> bool {
        self != Screen::Intro
    }

    pub fn is_complete(self) -> bool {
        self == Screen::LevelComplete
    }
}

/// Things that happened during a tick, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    Jumped,
    CoinCollected { remaining: usize },
    InvincibilityStarted { until_ms: f64 },
    FellOff,
    LevelCompleted,
}

/// A static collision surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
        }
    }
}

/// A floating collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    /// Resting top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub float_amplitude: f32,
    /// Bob phase speed (radians per millisecond)
    pub float_speed: f64,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            float_amplitude: COIN_FLOAT_AMPLITUDE,
            float_speed: COIN_FLOAT_SPEED,
            collected: false,
        }
    }

    /// Current vertical bob relative to the resting position
    #[inline]
    pub fn float_offset(&self, now_ms: f64) -> f32 {
        self.float_amplitude * (now_ms * self.float_speed).sin() as f32
    }

    /// Where the coin is drawn (and touched) at `now_ms`
    pub fn hitbox(&self, now_ms: f64) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y + self.float_offset(now_ms),
            self.size,
            self.size,
        )
    }

    pub fn is_touching(&self, character: &Character, now_ms: f64) -> bool {
        self.hitbox(now_ms).intersects(&character.bounds())
    }

    pub fn collect(&mut self) {
        self.collected = true;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub on_ground: bool,
    /// Timestamp (ms) until which trap contact is ignored
    pub invincible_until: f64,
}

impl Character {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            invincible_until: 0.0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self, strength: f32) -> bool {
        if self.on_ground {
            self.vel.y = -strength;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_invincible(&self, now_ms: f64) -> bool {
        now_ms < self.invincible_until
    }

    /// Put the character back at the top after falling off the world.
    /// Horizontal position and invincibility are kept.
    pub fn reset_fall(&mut self) {
        self.pos.y = 0.0;
        self.vel.y = 0.0;
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Level seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub screen: Screen,
    /// Coins picked up, shown on the HUD
    pub score: u32,
    pub coins_collected: usize,
    /// Coins the level was generated with
    pub coins_total: usize,
    /// Simulation tick counter (only advances once play has started)
    pub time_ticks: u64,
    pub character: Character,
    pub camera: Camera,
    /// Generation order is collision priority order
    pub platforms: Vec<Platform>,
    /// Uncollected coins
    pub coins: Vec<Coin>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with a level generated from `seed`
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = level::generate_platforms(&mut rng, &tuning);
        let coins = level::generate_coins(&mut rng, &platforms, &tuning);
        log::info!(
            "Generated level (seed {}): {} platforms, {} coins",
            seed,
            platforms.len(),
            coins.len()
        );
        Self::with_level(seed, tuning, platforms, coins)
    }

    /// Create a game around a hand-built level
    pub fn with_level(seed: u64, tuning: Tuning, platforms: Vec<Platform>, coins: Vec<Coin>) -> Self {
        let character = Character::new(
            Vec2::new(tuning.canvas_width / 2.0, 0.0),
            tuning.character_size,
        );
        let camera = Camera::new(0.0, 0.0, tuning.canvas_width, tuning.canvas_height);
        Self {
            seed,
            screen: Screen::Intro,
            score: 0,
            coins_collected: 0,
            coins_total: coins.len(),
            time_ticks: 0,
            character,
            camera,
            platforms,
            coins,
            events: Vec::new(),
            tuning,
        }
    }

    /// Start button area in canvas coordinates
    pub fn start_button(&self) -> Rect {
        start_button_rect(&self.tuning)
    }

    /// Top edge of the ground strip
    pub fn ground_top(&self) -> f32 {
        self.tuning.canvas_height - self.tuning.ground_height
    }
}

/// Start button area for a given canvas size
pub fn start_button_rect(tuning: &Tuning) -> Rect {
    Rect::new(
        tuning.canvas_width / 2.0 - START_BUTTON_WIDTH / 2.0,
        tuning.canvas_height * START_BUTTON_Y_FRACTION,
        START_BUTTON_WIDTH,
        START_BUTTON_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_intro() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.screen, Screen::Intro);
        assert!(!state.screen.is_started());
        assert_eq!(state.coins_total, 20);
        assert_eq!(state.coins.len(), 20);
        assert_eq!(state.platforms.len(), 40);
        assert_eq!(state.character.pos, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_start_button_geometry() {
        let rect = start_button_rect(&Tuning::default());
        assert_eq!(rect, Rect::new(325.0, 420.0, 150.0, 50.0));
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut c = Character::new(Vec2::ZERO, 40.0);
        assert!(!c.jump(12.0));
        assert_eq!(c.vel.y, 0.0);

        c.on_ground = true;
        assert!(c.jump(12.0));
        assert_eq!(c.vel.y, -12.0);
    }

    #[test]
    fn test_invincibility_is_time_based() {
        let mut c = Character::new(Vec2::ZERO, 40.0);
        c.invincible_until = 1000.0;
        assert!(c.is_invincible(999.0));
        assert!(!c.is_invincible(1000.0));
    }

    #[test]
    fn test_coin_hitbox_follows_float() {
        let coin = Coin::new(Vec2::new(100.0, 100.0), 25.0);
        assert_eq!(coin.hitbox(0.0).y, 100.0);

        // sin(pi/2) = 1 at now = (pi/2) / 0.01 ms
        let peak = std::f64::consts::FRAC_PI_2 / COIN_FLOAT_SPEED;
        assert!((coin.hitbox(peak).y - 110.0).abs() < 1e-3);
    }

    #[test]
    fn test_coin_touch_uses_animated_position() {
        let coin = Coin::new(Vec2::new(100.0, 100.0), 25.0);
        // Character bottom edge sits 5px above the resting coin top
        let character = Character::new(Vec2::new(100.0, 55.0), 40.0);
        assert!(!coin.is_touching(&character, 0.0));

        // At the trough the coin rises 10px into the character
        let trough = 3.0 * std::f64::consts::FRAC_PI_2 / COIN_FLOAT_SPEED;
        assert!(coin.is_touching(&character, trough));
    }
}
