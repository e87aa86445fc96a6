//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Time-derived
//! state (coin float, invincibility) reads the injected `now_ms` only.

use glam::Vec2;

use super::collision;
use super::state::{Character, GameEvent, GameState, Screen};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Jump pressed since the last tick
    pub jump: bool,
    /// Click position in canvas coordinates since the last tick
    pub click: Option<Vec2>,
}

/// Advance the game state by one fixed timestep.
///
/// Physics and the camera run on every screen, so the character has already
/// settled onto the level by the time the intro is dismissed.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.events.clear();

    if let (Screen::Intro, Some(click)) = (state.screen, input.click) {
        if state.start_button().contains(click) {
            state.screen = Screen::Playing;
            state.events.push(GameEvent::GameStarted);
            log::info!("Game started");
        }
    }

    state.time_ticks += 1;

    if input.jump && state.character.jump(state.tuning.jump_strength) {
        state.events.push(GameEvent::Jumped);
    }
    let accel = state.tuning.acceleration;
    if input.left {
        state.character.vel.x -= accel;
    }
    if input.right {
        state.character.vel.x += accel;
    }

    update_character(state, now_ms);

    let level_width = state.tuning.level_width();
    state.camera.follow(&state.character, level_width);

    let ground_top = state.ground_top();
    collision::rest_on_ground(&mut state.character, ground_top);
}

/// Character physics, trap contact, coin pickup and level completion, in that order
fn update_character(state: &mut GameState, now_ms: f64) {
    let tuning = &state.tuning;
    let character = &mut state.character;

    character.vel.y += tuning.gravity;
    character.pos.y += character.vel.y;

    collision::resolve_platforms(character, &state.platforms);

    integrate_horizontal(character, tuning.level_width());

    character.vel.x *= if character.on_ground {
        tuning.ground_friction
    } else {
        tuning.air_friction
    };

    // Coins double as traps: touching one starts an invincibility window
    if !character.is_invincible(now_ms)
        && collision::first_touching(&state.coins, character, now_ms).is_some()
    {
        character.invincible_until = now_ms + tuning.invincibility_ms;
        state.events.push(GameEvent::InvincibilityStarted {
            until_ms: character.invincible_until,
        });
        log::debug!("Invincible until {:.0}", character.invincible_until);
    }

    if character.pos.y > tuning.canvas_height + tuning.max_fall_distance() {
        character.reset_fall();
        state.events.push(GameEvent::FellOff);
        log::debug!("Fell off the level at x={:.1}", character.pos.x);
    }

    collect_coins(state, now_ms);

    // Only a running game can complete; coins picked up behind the intro
    // count once play starts
    if state.coins_collected == state.coins_total && state.screen == Screen::Playing {
        state.screen = Screen::LevelComplete;
        state.events.push(GameEvent::LevelCompleted);
        log::info!("Level complete after {} ticks", state.time_ticks);
    }
}

/// Clamp into the level, then move. A large velocity can carry the character
/// past the edge for one tick; the next clamp pulls it back.
fn integrate_horizontal(character: &mut Character, level_width: f32) {
    character.pos.x = character.pos.x.max(0.0).min(level_width - character.size);
    character.pos.x += character.vel.x;
}

/// Move every coin touching the character out of the active set
fn collect_coins(state: &mut GameState, now_ms: f64) {
    let mut i = 0;
    while i < state.coins.len() {
        if state.coins[i].is_touching(&state.character, now_ms) {
            let mut coin = state.coins.remove(i);
            coin.collect();
            state.score += 1;
            state.coins_collected += 1;
            let remaining = state.coins.len();
            state.events.push(GameEvent::CoinCollected { remaining });
            log::debug!(
                "Coin collected at ({:.0}, {:.0}), {} left",
                coin.pos.x,
                coin.pos.y,
                remaining
            );
        } else {
            i += 1;
        }
    }
}
