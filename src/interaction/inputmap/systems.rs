//! Systems for input action evaluation.
use bevy::prelude::*;

use super::types::{Action, InputMap};
use crate::gameplay::motion::MotionInput;

/// Copy directional key state into `MotionInput`. The grounded bit is owned by
/// the contact systems and left untouched.
pub fn system_collect_motion(
    keyboard: Res<ButtonInput<KeyCode>>,
    input_map: Res<InputMap>,
    mut motion: ResMut<MotionInput>,
) {
    let next = MotionInput {
        left: input_map.pressed(Action::Left, &keyboard),
        right: input_map.pressed(Action::Right, &keyboard),
        up: input_map.pressed(Action::Up, &keyboard),
        down: input_map.pressed(Action::Down, &keyboard),
        grounded: motion.grounded,
    };
    if *motion != next {
        *motion = next;
    }
}
