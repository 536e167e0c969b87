//! Per-tick mapping from directional input to player velocity and animation.
//! Screen space: negative vertical velocity points up.

use bevy::prelude::*;

use crate::core::config::PlayerConfig;

/// Directional key state for one tick plus the engine's grounded fact.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Read but unused by the mapping.
    pub down: bool,
    pub grounded: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnimation {
    Left,
    Right,
    #[default]
    Turn,
}

impl PlayerAnimation {
    pub fn key(self) -> &'static str {
        match self {
            PlayerAnimation::Left => "left",
            PlayerAnimation::Right => "right",
            PlayerAnimation::Turn => "turn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCommand {
    pub velocity_x: f32,
    /// Vertical velocity to set this tick, if any.
    pub jump: Option<f32>,
    pub animation: PlayerAnimation,
}

/// Holding both directions cancels out to the idle pose.
pub fn map_motion(input: &MotionInput, player: &PlayerConfig) -> MotionCommand {
    let (velocity_x, animation) = if input.left && !input.right {
        (-player.run_speed, PlayerAnimation::Left)
    } else if input.right && !input.left {
        (player.run_speed, PlayerAnimation::Right)
    } else {
        (0.0, PlayerAnimation::Turn)
    };
    let jump = (input.up && input.grounded).then_some(-player.jump_speed);
    MotionCommand {
        velocity_x,
        jump,
        animation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(left: bool, right: bool, up: bool, grounded: bool) -> MotionInput {
        MotionInput {
            left,
            right,
            up,
            down: false,
            grounded,
        }
    }

    #[test]
    fn left_only_runs_left() {
        let cmd = map_motion(&input(true, false, false, true), &PlayerConfig::default());
        assert_eq!(cmd.velocity_x, -160.0);
        assert_eq!(cmd.animation.key(), "left");
        assert_eq!(cmd.jump, None);
    }

    #[test]
    fn right_only_runs_right() {
        let cmd = map_motion(&input(false, true, false, false), &PlayerConfig::default());
        assert_eq!(cmd.velocity_x, 160.0);
        assert_eq!(cmd.animation, PlayerAnimation::Right);
    }

    #[test]
    fn neither_or_both_stands_still_facing_forward() {
        let cfg = PlayerConfig::default();
        let idle = map_motion(&input(false, false, false, true), &cfg);
        assert_eq!(idle.velocity_x, 0.0);
        assert_eq!(idle.animation, PlayerAnimation::Turn);

        let both = map_motion(&input(true, true, false, true), &cfg);
        assert_eq!(both.velocity_x, 0.0);
        assert_eq!(both.animation, PlayerAnimation::Turn);
    }

    #[test]
    fn jump_needs_ground() {
        let cfg = PlayerConfig::default();
        assert_eq!(map_motion(&input(false, false, true, true), &cfg).jump, Some(-430.0));
        assert_eq!(map_motion(&input(false, false, true, false), &cfg).jump, None);
        assert_eq!(map_motion(&input(false, false, false, true), &cfg).jump, None);
    }

    #[test]
    fn down_is_ignored() {
        let cfg = PlayerConfig::default();
        let mut with_down = input(false, false, false, true);
        with_down.down = true;
        assert_eq!(
            map_motion(&with_down, &cfg),
            map_motion(&input(false, false, false, true), &cfg)
        );
    }
}
