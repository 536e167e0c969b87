use bevy::prelude::*;

use super::stats::{DebugState, DebugStats};
use crate::gameplay::session::SessionController;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    controller: Option<Res<SessionController>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let Some(controller) = controller else {
        return;
    };
    let s = controller.state();
    info!(
        target: "session",
        "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} phase={:?} score={} high={} stars={}/{} bombs={} rounds={} grounded={}",
        state.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        s.phase,
        s.score.score,
        s.score.high_score,
        s.stars.active_count(),
        s.stars.len(),
        stats.bomb_count,
        s.rounds_completed,
        stats.grounded
    );
}
