use bevy::prelude::*;

use super::parse::parse_input_config;
use super::systems::system_collect_motion;
use super::types::InputMap;
use crate::core::config::GameConfig;
use crate::core::system::system_order::InputSet;
use crate::gameplay::motion::MotionInput;

pub struct InputActionsPlugin;

impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .init_resource::<MotionInput>()
            .add_systems(PreStartup, load_input_map)
            .add_systems(Update, system_collect_motion.in_set(InputSet));
    }
}

fn load_input_map(mut commands: Commands, cfg: Res<GameConfig>) {
    let parsed = parse_input_config(&cfg.input);
    for e in &parsed.errors {
        error!(target: "input", "INPUT MAP ERROR: {e}");
    }
    info!(target: "input", "Input map loaded: reset={:?}", parsed.input_map.reset);
    commands.insert_resource(parsed.input_map);
}
