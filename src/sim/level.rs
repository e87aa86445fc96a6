//! Procedural level generation
//!
//! Platforms form a loose ladder: one per vertical slot, scattered
//! horizontally across the level. Coins come in rows hovering above randomly
//! chosen platforms.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, Platform};
use crate::tuning::Tuning;

/// Horizontal gap between consecutive coins in a row is `rand * COIN_GAP_JITTER + size + COIN_GAP_PAD`
const COIN_GAP_JITTER: f32 = 60.0;
const COIN_GAP_PAD: f32 = 10.0;
/// Coins hover up to this far above their platform (beyond their own size)
const COIN_HOVER_JITTER: f32 = 30.0;

/// Generate platforms, one per vertical slot from the top of the canvas down
pub fn generate_platforms<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Vec<Platform> {
    let count = tuning.platform_count;
    if count == 0 {
        return Vec::new();
    }

    let slot_height = tuning.canvas_height / count as f32;
    let max_x = tuning.level_width() - tuning.platform_width;

    (0..count)
        .map(|i| {
            let x = rng.random::<f32>() * max_x;
            let y = slot_height * i as f32;
            Platform::new(x, y, tuning.platform_width, tuning.platform_height)
        })
        .collect()
}

/// Generate coin rows above random platforms.
///
/// Only the first coin of a row is guaranteed to start over its platform;
/// later coins may run past the platform edge.
pub fn generate_coins<R: Rng + ?Sized>(
    rng: &mut R,
    platforms: &[Platform],
    tuning: &Tuning,
) -> Vec<Coin> {
    if platforms.is_empty() {
        return Vec::new();
    }

    let size = tuning.coin_size;
    let per_group = tuning.coins_per_group;
    let mut coins = Vec::with_capacity(tuning.total_coins());

    for _ in 0..tuning.coin_groups {
        let platform = platforms[rng.random_range(0..platforms.len())].bounds;
        let slack = (platform.w - size * per_group as f32).max(0.0);
        let mut base_x = platform.x + rng.random::<f32>() * slack;

        for _ in 0..per_group {
            let x = base_x + rng.random::<f32>() * COIN_GAP_JITTER + size + COIN_GAP_PAD;
            base_x = x;
            let y = platform.y - size - rng.random::<f32>() * COIN_HOVER_JITTER;
            coins.push(Coin::new(Vec2::new(x, y), size));
        }
    }

    coins
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_platforms_fill_vertical_slots() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let platforms = generate_platforms(&mut rng, &tuning);

        assert_eq!(platforms.len(), 40);
        for (i, p) in platforms.iter().enumerate() {
            assert_eq!(p.bounds.y, 15.0 * i as f32);
            assert_eq!(p.bounds.w, 150.0);
            assert_eq!(p.bounds.h, 20.0);
            assert!(p.bounds.x >= 0.0);
            assert!(p.bounds.right() <= tuning.level_width());
        }
    }

    #[test]
    fn test_coin_count_is_groups_times_row() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let platforms = generate_platforms(&mut rng, &tuning);
        let coins = generate_coins(&mut rng, &platforms, &tuning);
        assert_eq!(coins.len(), 20);
        assert!(coins.iter().all(|c| !c.collected && c.size == 25.0));
    }

    #[test]
    fn test_coin_rows_step_right_and_hover_above_platform() {
        let tuning = Tuning {
            platform_count: 1,
            coin_groups: 1,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let platforms = generate_platforms(&mut rng, &tuning);
        let coins = generate_coins(&mut rng, &platforms, &tuning);
        let platform = platforms[0].bounds;

        assert_eq!(coins.len(), 4);
        // First coin starts within the platform's slack plus one gap
        assert!(coins[0].pos.x >= platform.x + 35.0);
        assert!(coins[0].pos.x <= platform.x + 50.0 + 95.0);
        for pair in coins.windows(2) {
            let gap = pair[1].pos.x - pair[0].pos.x;
            assert!((35.0..=95.0).contains(&gap), "gap {gap}");
        }
        for coin in &coins {
            assert!(coin.pos.y <= platform.y - 25.0);
            assert!(coin.pos.y >= platform.y - 55.0);
        }
    }

    #[test]
    fn test_same_seed_same_level() {
        let tuning = Tuning::default();
        let layout = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let platforms = generate_platforms(&mut rng, &tuning);
            let coins = generate_coins(&mut rng, &platforms, &tuning);
            (platforms, coins.iter().map(|c| c.pos).collect::<Vec<_>>())
        };
        assert_eq!(layout(42), layout(42));
        assert_ne!(layout(42).0, layout(43).0);
    }

    #[test]
    fn test_no_platforms_no_coins() {
        let tuning = Tuning {
            platform_count: 0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let platforms = generate_platforms(&mut rng, &tuning);
        assert!(platforms.is_empty());
        assert!(generate_coins(&mut rng, &platforms, &tuning).is_empty());
    }
}
