//! Collision filtering. Solid pairs: player/stars/bombs with platforms, player
//! and bombs with the arena walls, player with bombs. The player's reach sensor
//! only sees stars.
use bevy_rapier2d::prelude::*;

pub const PLAYER: Group = Group::GROUP_1;
pub const STAR: Group = Group::GROUP_2;
pub const BOMB: Group = Group::GROUP_3;
pub const PLATFORM: Group = Group::GROUP_4;
pub const ARENA: Group = Group::GROUP_5;
pub const REACH: Group = Group::GROUP_6;

pub fn player() -> CollisionGroups {
    CollisionGroups::new(PLAYER, PLATFORM | ARENA | BOMB)
}

pub fn reach() -> CollisionGroups {
    CollisionGroups::new(REACH, STAR)
}

pub fn star() -> CollisionGroups {
    CollisionGroups::new(STAR, PLATFORM | REACH)
}

pub fn bomb() -> CollisionGroups {
    CollisionGroups::new(BOMB, PLATFORM | ARENA | PLAYER)
}

pub fn platform() -> CollisionGroups {
    CollisionGroups::new(PLATFORM, PLAYER | STAR | BOMB)
}

pub fn arena() -> CollisionGroups {
    CollisionGroups::new(ARENA, PLAYER | BOMB)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interacts(a: CollisionGroups, b: CollisionGroups) -> bool {
        a.memberships.intersects(b.filters) && b.memberships.intersects(a.filters)
    }

    #[test]
    fn stars_ignore_bombs_walls_and_the_player_body() {
        assert!(!interacts(star(), bomb()));
        assert!(!interacts(star(), arena()));
        assert!(!interacts(star(), player()));
        assert!(interacts(star(), reach()));
        assert!(interacts(star(), platform()));
    }

    #[test]
    fn player_and_bombs_collide_with_each_other_and_the_world() {
        assert!(interacts(player(), bomb()));
        assert!(interacts(player(), platform()));
        assert!(interacts(bomb(), arena()));
        assert!(!interacts(reach(), bomb()));
        assert!(!interacts(reach(), platform()));
    }
}
