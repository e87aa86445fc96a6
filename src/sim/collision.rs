//! Collision detection and response
//!
//! Platforms are one-way: the character can only land on them while falling,
//! and only when its feet are inside the platform's vertical band. Sideways
//! and upward contact passes straight through.

use super::state::{Character, Coin, Platform};
use crate::consts::GROUND_SNAP_SCALE;

/// Index of the first platform (in generation order) the character lands on.
///
/// First match wins, even when a later platform would be closer.
pub fn find_landing(character: &Character, platforms: &[Platform]) -> Option<usize> {
    if character.vel.y <= 0.0 {
        return None;
    }
    let bounds = character.bounds();
    let feet = character.bottom();

    platforms.iter().position(|p| {
        let top = p.bounds.y;
        feet > top && feet < p.bounds.bottom() && bounds.overlaps_x(&p.bounds)
    })
}

/// Land on the first qualifying platform: snap feet to its top and stop falling.
/// Clears and sets the grounded flag. Returns the platform index landed on.
pub fn resolve_platforms(character: &mut Character, platforms: &[Platform]) -> Option<usize> {
    character.on_ground = false;
    let index = find_landing(character, platforms)?;
    character.on_ground = true;
    character.vel.y = 0.0;
    character.pos.y = platforms[index].bounds.y - character.size;
    Some(index)
}

/// Hold the character above the ground strip. Returns true if it was caught.
pub fn rest_on_ground(character: &mut Character, ground_top: f32) -> bool {
    let standing_height = character.size * GROUND_SNAP_SCALE;
    if character.pos.y + standing_height > ground_top {
        character.on_ground = true;
        character.vel.y = 0.0;
        character.pos.y = ground_top - standing_height;
        true
    } else {
        false
    }
}

/// First trap touching the character at `now_ms`
pub fn first_touching<'a>(
    traps: &'a [Coin],
    character: &Character,
    now_ms: f64,
) -> Option<&'a Coin> {
    traps.iter().find(|t| t.is_touching(character, now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn falling_at(x: f32, y: f32) -> Character {
        let mut c = Character::new(Vec2::new(x, y), 40.0);
        c.vel.y = 1.0;
        c
    }

    #[test]
    fn test_lands_when_feet_in_band() {
        let platforms = [Platform::new(0.0, 100.0, 150.0, 20.0)];
        let mut c = falling_at(10.0, 65.0); // feet at 105
        assert_eq!(resolve_platforms(&mut c, &platforms), Some(0));
        assert!(c.on_ground);
        assert_eq!(c.vel.y, 0.0);
        assert_eq!(c.pos.y, 60.0);
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let platforms = [Platform::new(0.0, 100.0, 150.0, 20.0)];
        // Feet exactly on the top edge
        let mut c = falling_at(10.0, 60.0);
        assert_eq!(resolve_platforms(&mut c, &platforms), None);
        assert!(!c.on_ground);
        // Feet exactly on the bottom edge
        let mut c = falling_at(10.0, 80.0);
        assert_eq!(resolve_platforms(&mut c, &platforms), None);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let platforms = [Platform::new(0.0, 100.0, 150.0, 20.0)];
        let mut c = falling_at(10.0, 65.0);
        c.vel.y = -3.0;
        assert_eq!(resolve_platforms(&mut c, &platforms), None);
        assert_eq!(c.pos.y, 65.0);
    }

    #[test]
    fn test_no_landing_without_horizontal_overlap() {
        let platforms = [Platform::new(0.0, 100.0, 150.0, 20.0)];
        let mut c = falling_at(150.0, 65.0);
        assert_eq!(resolve_platforms(&mut c, &platforms), None);
        let mut c = falling_at(-40.0, 65.0);
        assert_eq!(resolve_platforms(&mut c, &platforms), None);
    }

    #[test]
    fn test_first_generated_platform_wins() {
        // Both bands contain the feet (105). The later platform's top is closer.
        let platforms = [
            Platform::new(0.0, 90.0, 150.0, 20.0),
            Platform::new(0.0, 104.0, 150.0, 20.0),
        ];
        let mut c = falling_at(10.0, 65.0);
        assert_eq!(resolve_platforms(&mut c, &platforms), Some(0));
        assert_eq!(c.pos.y, 50.0);
    }

    #[test]
    fn test_ground_strip_snap() {
        let mut c = falling_at(10.0, 540.0);
        assert!(rest_on_ground(&mut c, 580.0));
        assert_eq!(c.pos.y, 530.0);
        assert!(c.on_ground);
        assert_eq!(c.vel.y, 0.0);

        let mut c = falling_at(10.0, 100.0);
        assert!(!rest_on_ground(&mut c, 580.0));
        assert!(!c.on_ground);
    }

    #[test]
    fn test_first_touching_trap() {
        let traps = [
            Coin::new(Vec2::new(500.0, 500.0), 25.0),
            Coin::new(Vec2::new(10.0, 10.0), 25.0),
            Coin::new(Vec2::new(20.0, 10.0), 25.0),
        ];
        let c = Character::new(Vec2::new(0.0, 0.0), 40.0);
        let hit = first_touching(&traps, &c, 0.0).unwrap();
        assert_eq!(hit.pos, Vec2::new(10.0, 10.0));
    }
}
