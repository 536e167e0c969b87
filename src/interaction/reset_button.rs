use bevy::prelude::*;

use crate::app::host::BevyHost;
use crate::core::components::ResetButton;
use crate::interaction::inputmap::types::{Action, InputMap};
use crate::gameplay::session::SessionController;
use crate::rendering::palette;

/// Click handler for the reset control; the reset key goes through the same path.
pub fn reset_button_interaction(
    mut q_btn: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ResetButton>)>,
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    input_map: Option<Res<InputMap>>,
    mut controller: ResMut<SessionController>,
    mut host: BevyHost,
) {
    let mut requested = false;
    for (interaction, mut bg) in q_btn.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(palette::BUTTON_PRESSED);
                requested = true;
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(palette::BUTTON_HOVER);
            }
            Interaction::None => {
                *bg = BackgroundColor(palette::BUTTON_IDLE);
            }
        }
    }
    if let (Some(keys), Some(map)) = (keyboard.as_deref(), input_map.as_deref()) {
        requested |= map.just_pressed(Action::Reset, keys);
    }
    if !requested {
        return;
    }
    match controller.fire_reset(&mut host) {
        Some(report) => info!(
            target: "input",
            final_score = report.final_score,
            high_score = report.high_score,
            new_high_score = report.new_high_score,
            "reset accepted"
        ),
        None => debug!(target: "input", "reset pressed while playing; ignored"),
    }
}
