use bevy::prelude::*;
use std::time::Duration;

use crate::core::system::system_order::PresentationSet;
use crate::gameplay::motion::PlayerAnimation;

/// Sprite sheet frames per animation: walk left, face forward, walk right.
pub fn frames(animation: PlayerAnimation) -> (usize, usize) {
    match animation {
        PlayerAnimation::Left => (0, 3),
        PlayerAnimation::Turn => (4, 4),
        PlayerAnimation::Right => (5, 8),
    }
}

pub fn frame_rate(animation: PlayerAnimation) -> f32 {
    match animation {
        PlayerAnimation::Left | PlayerAnimation::Right => 10.0,
        PlayerAnimation::Turn => 20.0,
    }
}

/// Looping frame cursor for the player sprite sheet.
#[derive(Component, Debug, Clone)]
pub struct PlayerAnimator {
    animation: PlayerAnimation,
    cursor: usize,
    timer: Timer,
}

impl Default for PlayerAnimator {
    fn default() -> Self {
        let animation = PlayerAnimation::Turn;
        Self {
            animation,
            cursor: 0,
            timer: Timer::from_seconds(1.0 / frame_rate(animation), TimerMode::Repeating),
        }
    }
}

impl PlayerAnimator {
    pub fn animation(&self) -> PlayerAnimation {
        self.animation
    }

    /// Switching restarts from the first frame; replaying the current one keeps going.
    pub fn play(&mut self, animation: PlayerAnimation) {
        if self.animation == animation {
            return;
        }
        self.animation = animation;
        self.cursor = 0;
        self.timer = Timer::from_seconds(1.0 / frame_rate(animation), TimerMode::Repeating);
    }

    pub fn frame(&self) -> usize {
        let (first, last) = frames(self.animation);
        first + self.cursor % (last - first + 1)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.tick(delta);
        self.cursor += self.timer.times_finished_this_tick() as usize;
    }
}

pub struct PlayerAnimationPlugin;

impl Plugin for PlayerAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, animate_player.in_set(PresentationSet));
    }
}

fn animate_player(time: Res<Time>, mut q: Query<(&mut PlayerAnimator, &mut Sprite)>) {
    for (mut animator, mut sprite) in &mut q {
        animator.advance(time.delta());
        let frame = animator.frame();
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if atlas.index != frame {
                atlas.index = frame;
            }
        }
    }
}
