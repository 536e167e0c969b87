//! Seam between the game rules and the host engine.
//!
//! The session controller decides *what* happens; a [`SceneHost`] applies it to
//! the engine (entity factories, body mutators, physics pause, text labels).
//! All positions and velocities crossing this seam are in screen space.

use bevy::prelude::*;

use super::motion::{MotionInput, PlayerAnimation};
use super::session::{ScoreState, StarId};
use super::spawn::BombSpawn;
use crate::core::config::PlatformConfig;

/// Engine operations the game rules rely on.
pub trait SceneHost {
    /// Request textures and sprite sheets.
    fn load_assets(&mut self);

    fn spawn_backdrop(&mut self);
    fn spawn_platform(&mut self, platform: &PlatformConfig);
    fn spawn_player(&mut self, at: Vec2);
    fn spawn_star(&mut self, id: StarId, at: Vec2, bounce: f32);
    fn spawn_bomb(&mut self, bomb: &BombSpawn);
    /// Score labels and the reset control.
    fn spawn_hud(&mut self, score: &ScoreState);

    /// Remove the star from simulation and rendering.
    fn disable_star(&mut self, id: StarId);
    /// Put the star back into play at `at`, at rest.
    fn enable_star(&mut self, id: StarId, at: Vec2);
    fn clear_bombs(&mut self);

    /// `None` until the player body exists.
    fn player_position(&self) -> Option<Vec2>;
    fn set_player_velocity_x(&mut self, vx: f32);
    fn set_player_velocity_y(&mut self, vy: f32);
    fn play_animation(&mut self, animation: PlayerAnimation);
    fn set_player_hit(&mut self, hit: bool);

    fn pause_physics(&mut self);
    fn resume_physics(&mut self);

    fn show_score(&mut self, score: &ScoreState);
}

/// Lifecycle hooks and gameplay events driven by the host engine.
pub trait SceneCallbacks {
    fn preload<H: SceneHost>(&mut self, host: &mut H);
    fn create<H: SceneHost>(&mut self, host: &mut H);
    fn update<H: SceneHost>(&mut self, host: &mut H, input: &MotionInput);
    fn on_star_overlap<H: SceneHost>(&mut self, host: &mut H, star: StarId) -> CollectOutcome;
    fn on_bomb_hit<H: SceneHost>(&mut self, host: &mut H) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// Star was inactive, unknown, or play is suspended.
    Ignored,
    Collected,
    /// Last star of the round; the row was refilled and a bomb added.
    RoundComplete,
}
