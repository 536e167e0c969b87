//! Debug module: feature gated periodic session summary.
//! Built only when compiled with `--features debug`; a no-op plugin otherwise.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::{DebugState, DebugStats};

use bevy::prelude::*;

pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use crate::core::system::system_order::PresentationSet;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .in_set(PresentationSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
impl Plugin for DebugPlugin {
    fn build(&self, _app: &mut App) {}
}
