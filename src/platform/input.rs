//! Keyboard and pointer input
//!
//! DOM callbacks write here as events arrive; the frame loop samples a
//! `TickInput` before each simulation tick. Held keys persist, presses and
//! clicks are one-shot and survive until a tick consumes them.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Accumulated input between simulation ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
    jump_queued: bool,
    click: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every keydown (auto-repeat included) queues a jump attempt
    pub fn key_down(&mut self, key: Key) {
        self.pressed.insert(key);
        if key == Key::Jump {
            self.jump_queued = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Record a click in canvas coordinates. A newer click replaces an unconsumed one.
    pub fn click(&mut self, pos: Vec2) {
        self.click = Some(pos);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Command for the next tick. Does not consume one-shot input.
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_pressed(Key::Left),
            right: self.is_pressed(Key::Right),
            jump: self.jump_queued,
            click: self.click,
        }
    }

    /// Clear one-shot input after a tick has seen it
    pub fn consume_one_shots(&mut self) {
        self.jump_queued = false;
        self.click = None;
    }

    /// Drop everything, e.g. when the page loses focus and keyup events go missing
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.consume_one_shots();
    }
}
