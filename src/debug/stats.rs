use bevy::prelude::*;

use crate::core::components::{Bomb, Grounded, Player};

#[derive(Resource, Debug)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    /// Seconds between summary lines.
    pub log_interval: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 5.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub bomb_count: usize,
    pub grounded: bool,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_bombs: Query<(), With<Bomb>>,
    q_player: Query<&Grounded, With<Player>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    let inst_ms = dt * 1000.0;
    stats.frame_time_ms = if stats.frame_time_ms == 0.0 {
        inst_ms
    } else {
        stats.frame_time_ms * 0.9 + inst_ms * 0.1
    };
    stats.bomb_count = q_bombs.iter().count();
    stats.grounded = q_player.iter().any(|g| g.0);
}
