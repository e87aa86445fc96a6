//! Side-scrolling camera
//!
//! The camera only moves horizontally, and only when the character leaves the
//! dead zone in the middle of the viewport. It never shows anything past the
//! level edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Character;
use crate::consts::{DEAD_ZONE_FRACTION, PARALLAX_FACTOR};

/// Viewport into the level, used as a rendering offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where to blit the scrolling background, in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundLayout {
    pub first: Rect,
    /// Second tile to the right when the first leaves a gap
    pub second: Option<Rect>,
}

impl Camera {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Translation that maps world coordinates to screen coordinates
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }

    /// Dead-zone follow. Snaps so the character sits on the dead-zone edge,
    /// clamped to `[0, level_width - width]`.
    pub fn follow(&mut self, character: &Character, level_width: f32) {
        let margin = self.width * DEAD_ZONE_FRACTION;
        let cx = character.pos.x;

        if cx > self.x + self.width - margin && self.x + self.width < level_width {
            self.x = (cx - self.width + margin).min(level_width - self.width);
        } else if cx < self.x + margin && self.x > 0.0 {
            self.x = (cx - margin).max(0.0);
        }
    }

    /// Parallax background placement. The image is stretched to span the
    /// level at half scroll speed.
    pub fn background_layout(&self, level_width: f32, canvas_width: f32) -> BackgroundLayout {
        let bg_x = -self.x * PARALLAX_FACTOR;
        let bg_y = -self.y * PARALLAX_FACTOR;
        let scaled_width = self.width * level_width / canvas_width;
        let first = Rect::new(bg_x, bg_y, scaled_width, self.height);

        let second = (bg_x + scaled_width < canvas_width)
            .then(|| Rect::new(bg_x + scaled_width, bg_y, scaled_width, self.height));

        BackgroundLayout { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LEVEL: f32 = 3200.0;

    fn character_at(x: f32) -> Character {
        Character::new(Vec2::new(x, 0.0), 40.0)
    }

    #[test]
    fn test_no_move_inside_dead_zone() {
        let mut cam = Camera::new(0.0, 0.0, 800.0, 600.0);
        cam.follow(&character_at(400.0), LEVEL);
        assert_eq!(cam.x, 0.0);
        // Right edge of the dead zone is exclusive
        cam.follow(&character_at(640.0), LEVEL);
        assert_eq!(cam.x, 0.0);
    }

    #[test]
    fn test_follow_right_snaps_to_dead_zone_edge() {
        let mut cam = Camera::new(0.0, 0.0, 800.0, 600.0);
        cam.follow(&character_at(700.0), LEVEL);
        assert_eq!(cam.x, 60.0);
    }

    #[test]
    fn test_follow_right_clamps_to_level_end() {
        let mut cam = Camera::new(2300.0, 0.0, 800.0, 600.0);
        cam.follow(&character_at(3160.0), LEVEL);
        assert_eq!(cam.x, 2400.0);
        // At the end the camera stops following
        cam.follow(&character_at(3160.0), LEVEL);
        assert_eq!(cam.x, 2400.0);
    }

    #[test]
    fn test_follow_left() {
        let mut cam = Camera::new(1000.0, 0.0, 800.0, 600.0);
        cam.follow(&character_at(1100.0), LEVEL);
        assert_eq!(cam.x, 940.0);

        cam.follow(&character_at(50.0), LEVEL);
        assert_eq!(cam.x, 0.0);
    }

    #[test]
    fn test_background_single_tile_at_origin() {
        let cam = Camera::new(0.0, 0.0, 800.0, 600.0);
        let layout = cam.background_layout(LEVEL, 800.0);
        assert_eq!(layout.first, Rect::new(0.0, 0.0, 3200.0, 600.0));
        assert!(layout.second.is_none());
    }

    #[test]
    fn test_background_tiles_when_gap_appears() {
        // Narrow level so the stretched image is shorter than the scroll
        let cam = Camera::new(1000.0, 0.0, 800.0, 600.0);
        let layout = cam.background_layout(800.0, 800.0);
        assert_eq!(layout.first.x, -500.0);
        assert_eq!(layout.second, Some(Rect::new(300.0, 0.0, 800.0, 600.0)));
    }

    proptest! {
        #[test]
        fn prop_camera_stays_in_level(
            start in 0.0f32..2400.0,
            xs in prop::collection::vec(-500.0f32..3700.0, 1..50),
        ) {
            let mut cam = Camera::new(start, 0.0, 800.0, 600.0);
            for x in xs {
                cam.follow(&character_at(x), LEVEL);
                prop_assert!(cam.x >= 0.0);
                prop_assert!(cam.x <= LEVEL - cam.width);
            }
        }
    }
}
