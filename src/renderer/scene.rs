//! Scene drawing
//!
//! Pure functions of game state, settings and the frame timestamp. Nothing
//! here mutates the simulation.

use glam::Vec2;

use super::{Fill, ImageId, Surface, TextAlign, TextBaseline, TextStyle};
use crate::consts::{CREDITS_TEXT, TITLE_TEXT};
use crate::settings::Settings;
use crate::sim::{GameState, Rect};
use crate::{Tuning, bob};

const PLATFORM_FILL: Fill = Fill::Css("green");
const INVINCIBLE_FILL: Fill = Fill::Css("red");
/// Hue used for animated text when motion is reduced
const STEADY_HUE: f32 = 50.0;

const TITLE_FONT: &str = "bold 48px 'Press Start 2P', Arial";
const CREDITS_FONT: &str = "16px 'Press Start 2P', Arial";
const BUTTON_FONT: &str = "bold 24px 'Press Start 2P', Arial";
const BANNER_FONT: &str = "bold 48px Arial";
const SCORE_FONT: &str = "bold 32px Arial";
const FPS_FONT: &str = "16px monospace";

/// Draw one frame: the intro screen before play starts, the level afterwards
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    settings: &Settings,
    now_ms: f64,
    fps: u32,
) {
    if !state.screen.is_started() {
        draw_intro(surface, &state.tuning, settings, now_ms);
    } else {
        draw_level(surface, state, settings, now_ms);
    }

    if settings.show_fps {
        let style = TextStyle {
            font: FPS_FONT,
            fill: Fill::Css("black"),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        };
        surface.fill_text(&format!("FPS: {}", fps), Vec2::new(10.0, 20.0), &style);
    }
}

fn draw_intro<S: Surface + ?Sized>(
    surface: &mut S,
    tuning: &Tuning,
    settings: &Settings,
    now_ms: f64,
) {
    let (w, h) = (tuning.canvas_width, tuning.canvas_height);
    surface.draw_image(ImageId::IntroBackground, Rect::new(0.0, 0.0, w, h));

    // Rainbow title, slowly bobbing
    let (hue, y_offset) = if settings.reduced_motion {
        (STEADY_HUE, 0.0)
    } else {
        (((now_ms / 40.0) % 360.0) as f32, bob(now_ms, 10.0, 400.0))
    };
    let mut style = TextStyle {
        font: TITLE_FONT,
        fill: Fill::Hue(hue),
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    surface.fill_text(TITLE_TEXT, Vec2::new(w / 2.0, 50.0 + y_offset), &style);

    style.font = CREDITS_FONT;
    surface.fill_text(CREDITS_TEXT, Vec2::new(w / 2.0, h - 30.0), &style);

    let button = crate::sim::start_button_rect(tuning);
    surface.fill_rect(button, Fill::Css("white"));
    style.font = BUTTON_FONT;
    style.fill = Fill::Css("black");
    surface.fill_text("START", Vec2::new(w / 2.0, button.center().y), &style);
}

fn draw_level<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    settings: &Settings,
    now_ms: f64,
) {
    let tuning = &state.tuning;
    let level_width = tuning.level_width();
    surface.clear(tuning.canvas_width, tuning.canvas_height);

    let layout = state.camera.background_layout(level_width, tuning.canvas_width);
    surface.draw_image(ImageId::Background, layout.first);
    if let Some(second) = layout.second {
        surface.draw_image(ImageId::Background, second);
    }

    // World pass
    surface.save();
    surface.translate(state.camera.offset());

    surface.fill_rect(
        Rect::new(0.0, state.ground_top(), level_width, tuning.ground_height),
        PLATFORM_FILL,
    );
    for platform in &state.platforms {
        surface.fill_rect(platform.bounds, PLATFORM_FILL);
    }
    for coin in &state.coins {
        surface.draw_image(ImageId::Coin, coin.hitbox(now_ms));
    }

    let character = &state.character;
    if character.is_invincible(now_ms) {
        let alpha = if settings.reduced_motion {
            0.5
        } else {
            ((now_ms / 100.0).sin() * 0.5 + 0.5) as f32
        };
        surface.save();
        surface.set_alpha(alpha);
        surface.fill_rect(character.bounds(), INVINCIBLE_FILL);
        surface.restore();
    }
    surface.draw_image(ImageId::Character, character.bounds());

    surface.restore();

    // HUD
    if state.screen.is_complete() {
        draw_level_complete(surface, tuning, settings, now_ms);
    } else {
        let style = TextStyle {
            font: SCORE_FONT,
            fill: Fill::Css("black"),
            align: TextAlign::Right,
            baseline: TextBaseline::Middle,
        };
        surface.fill_text(
            &format!("Score: {}", state.score),
            Vec2::new(tuning.canvas_width - 20.0, 40.0),
            &style,
        );
    }
}

fn draw_level_complete<S: Surface + ?Sized>(
    surface: &mut S,
    tuning: &Tuning,
    settings: &Settings,
    now_ms: f64,
) {
    let (hue, y_offset) = if settings.reduced_motion {
        (STEADY_HUE, 0.0)
    } else {
        (flash_hue(now_ms), bob(now_ms, 10.0, 400.0))
    };
    let style = TextStyle {
        font: BANNER_FONT,
        fill: Fill::Hue(hue),
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    let center = Vec2::new(tuning.canvas_width / 2.0, tuning.canvas_height / 2.0 + y_offset);
    surface.fill_text("LEVEL COMPLETE", center, &style);
    surface.fill_text(TITLE_TEXT, center + Vec2::new(0.0, 60.0), &style);
}

/// A hue that jumps around every frame, derived from the frame timestamp
fn flash_hue(now_ms: f64) -> f32 {
    let mixed = now_ms.to_bits().wrapping_mul(0x9E37_79B9_7F4A_7C15);
    ((mixed >> 40) % 360) as f32
}
