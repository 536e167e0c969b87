use bevy::prelude::*;

use super::collisions::route_collisions;
use super::host::BevyHost;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{ContactSet, InputSet, PresentationSet, SessionSet};
use crate::debug::DebugPlugin;
use crate::gameplay::motion::MotionInput;
use crate::gameplay::scene::SceneCallbacks;
use crate::gameplay::session::SessionController;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::interaction::reset_button::reset_button_interaction;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::{ContactPlugin, PhysicsSetupPlugin};
use crate::rendering::animation::PlayerAnimationPlugin;
use crate::rendering::camera::CameraPlugin;

/// Whole game on top of `DefaultPlugins`. Expects `GameConfig` to be inserted first.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            warn!(target: "config", "GameConfig missing; using defaults");
            app.insert_resource(GameConfig::default());
        }
        let cfg = app.world().resource::<GameConfig>().clone();

        app.configure_sets(
            Update,
            (
                InputSet,
                ContactSet.after(InputSet),
                SessionSet.after(ContactSet),
                PresentationSet.after(SessionSet),
            ),
        )
        .insert_resource(SessionController::from_config(cfg))
        .init_resource::<MotionInput>()
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            ContactPlugin,
            InputActionsPlugin,
            PlayerAnimationPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ))
        .add_systems(PreStartup, preload_scene)
        .add_systems(Startup, create_scene)
        .add_systems(
            Update,
            (route_collisions, drive_player, reset_button_interaction)
                .chain()
                .in_set(SessionSet),
        );
    }
}

fn preload_scene(mut controller: ResMut<SessionController>, mut host: BevyHost) {
    controller.preload(&mut host);
}

fn create_scene(mut controller: ResMut<SessionController>, mut host: BevyHost) {
    controller.create(&mut host);
}

fn drive_player(
    motion: Res<MotionInput>,
    mut controller: ResMut<SessionController>,
    mut host: BevyHost,
) {
    controller.update(&mut host, &motion);
}
