use bevy::prelude::*;
use rand::Rng;

use crate::core::config::{BombConfig, SpawnRange};

/// Placement for one new bomb, screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BombSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Drops the bomb on the half of the arena opposite `player_x`, moving sideways
/// at a random speed and slowly downward.
pub fn roll_bomb<R: Rng + ?Sized>(rng: &mut R, player_x: f32, cfg: &BombConfig) -> BombSpawn {
    let side = if player_x < cfg.split_x {
        &cfg.right_side
    } else {
        &cfg.left_side
    };
    BombSpawn {
        position: Vec2::new(sample(rng, side), cfg.spawn_y),
        velocity: Vec2::new(sample(rng, &cfg.velocity_x), cfg.velocity_y),
    }
}

/// Half-open `[min, max)` sample; degenerate ranges collapse to `min`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, range: &SpawnRange<f32>) -> f32 {
    if range.min < range.max {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn player_on_left_half_drops_bomb_on_right_half() {
        let cfg = BombConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let b = roll_bomb(&mut rng, 100.0, &cfg);
            assert!((400.0..800.0).contains(&b.position.x), "{b:?}");
            assert_eq!(b.position.y, 20.0);
            assert!((-200.0..200.0).contains(&b.velocity.x));
            assert_eq!(b.velocity.y, 20.0);
        }
    }

    #[test]
    fn player_on_right_half_drops_bomb_on_left_half() {
        let cfg = BombConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        for x in [400.0, 550.0, 799.0] {
            let b = roll_bomb(&mut rng, x, &cfg);
            assert!((0.0..400.0).contains(&b.position.x), "{b:?}");
        }
    }

    #[test]
    fn same_seed_same_bomb() {
        let cfg = BombConfig::default();
        let a = roll_bomb(&mut StdRng::seed_from_u64(11), 10.0, &cfg);
        let b = roll_bomb(&mut StdRng::seed_from_u64(11), 10.0, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample(&mut rng, &SpawnRange { min: 5.0, max: 5.0 }), 5.0);
    }
}
