//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override them with a JSON
//! block. Physics values are per simulation tick (see `consts::SIM_DT`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    /// Logical canvas width (pixels)
    pub canvas_width: f32,
    /// Logical canvas height (pixels)
    pub canvas_height: f32,
    /// Level width measured in canvas widths
    pub level_screens: f32,

    // === Physics ===
    /// Downward acceleration added to vertical velocity every tick
    pub gravity: f32,
    /// Upward speed applied by a jump
    pub jump_strength: f32,
    /// Horizontal speed gained per tick while an arrow key is held
    pub acceleration: f32,
    /// Horizontal velocity multiplier while grounded
    pub ground_friction: f32,
    /// Horizontal velocity multiplier while airborne
    pub air_friction: f32,
    /// Invincibility window after touching a trap (milliseconds)
    pub invincibility_ms: f64,

    // === Character ===
    pub character_size: f32,

    // === Level layout ===
    pub platform_count: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    pub coin_groups: usize,
    pub coins_per_group: usize,
    pub coin_size: f32,
    /// Height of the ground strip along the bottom of the level
    pub ground_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            level_screens: 4.0,

            gravity: 0.3,
            jump_strength: 12.0,
            acceleration: 0.5,
            ground_friction: 0.9,
            air_friction: 0.85,
            invincibility_ms: 5000.0,

            character_size: 40.0,

            platform_count: 40,
            platform_width: 150.0,
            platform_height: 20.0,
            coin_groups: 5,
            coins_per_group: 4,
            coin_size: 25.0,
            ground_height: 20.0,
        }
    }
}

impl Tuning {
    /// Total horizontal extent of the level
    #[inline]
    pub fn level_width(&self) -> f32 {
        self.canvas_width * self.level_screens
    }

    /// How far below the canvas the character may fall before being reset
    #[inline]
    pub fn max_fall_distance(&self) -> f32 {
        self.canvas_height / 2.0
    }

    /// Number of coins a generated level contains
    #[inline]
    pub fn total_coins(&self) -> usize {
        self.coin_groups * self.coins_per_group
    }

    /// Parse and validate tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("level_screens", self.level_screens),
            ("character_size", self.character_size),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("coin_size", self.coin_size),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        for (field, value) in [
            ("ground_friction", self.ground_friction),
            ("air_friction", self.air_friction),
        ] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be in (0, 1]",
                });
            }
        }

        if self.level_screens < 1.0 {
            return Err(TuningError::Invalid {
                field: "level_screens",
                reason: "level must be at least one screen wide",
            });
        }
        if self.platform_width > self.level_width() {
            return Err(TuningError::Invalid {
                field: "platform_width",
                reason: "wider than the level",
            });
        }
        if self.platform_count == 0 && self.coin_groups > 0 {
            return Err(TuningError::Invalid {
                field: "platform_count",
                reason: "coins need at least one platform",
            });
        }
        if self.coin_size * self.coins_per_group as f32 > self.platform_width {
            return Err(TuningError::Invalid {
                field: "coins_per_group",
                reason: "coin row is wider than a platform",
            });
        }
        Ok(())
    }
}

/// Errors from loading tuning data
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "tuning is not valid JSON: {}", e),
            Self::Invalid { field, reason } => write!(f, "tuning field `{}` {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}
