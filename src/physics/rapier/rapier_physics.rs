use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::groups;
use crate::core::components::{ArenaBound, Surface};
use crate::core::config::GameConfig;

const LOG_TARGET: &str = "physics";
const BOUND_THICKNESS: f32 = 40.0;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & arena

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let pixels_per_meter = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.world.pixels_per_meter)
            .unwrap_or(100.0);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(pixels_per_meter))
            .add_systems(Startup, spawn_arena_bounds)
            .add_systems(Update, sync_gravity);

        #[cfg(feature = "debug")]
        if app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|c| c.rapier_debug)
        {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Keep Rapier's gravity in line with the config. The context entity holding
/// `RapierConfiguration` appears after plugin startup, so this is re-checked every frame.
fn sync_gravity(mut q_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    let gravity = Vect::new(0.0, -cfg.world.gravity);
    for mut rapier_cfg in &mut q_cfg {
        if rapier_cfg.gravity != gravity {
            rapier_cfg.gravity = gravity;
            info!(target: LOG_TARGET, "gravity -> ({:.0}, {:.0})", gravity.x, gravity.y);
        }
    }
}

/// Freeze or resume every body by toggling the Rapier pipeline.
pub fn set_simulation_active(q_cfg: &mut Query<&mut RapierConfiguration>, active: bool) {
    let mut found = false;
    for mut rapier_cfg in q_cfg.iter_mut() {
        found = true;
        if rapier_cfg.physics_pipeline_active != active {
            rapier_cfg.physics_pipeline_active = active;
        }
    }
    if found {
        info!(target: LOG_TARGET, "physics {}", if active { "resumed" } else { "paused" });
    } else {
        warn!(target: LOG_TARGET, "no RapierConfiguration found; cannot set pipeline active={active}");
    }
}

/// Walls just outside the visible arena, world space.
pub fn arena_walls(width: f32, height: f32) -> [(Vec2, Vec2); 4] {
    let t = BOUND_THICKNESS;
    let (hw, hh) = (width * 0.5, height * 0.5);
    [
        (Vec2::new(0.0, -hh - t * 0.5), Vec2::new(hw + t, t * 0.5)),
        (Vec2::new(0.0, hh + t * 0.5), Vec2::new(hw + t, t * 0.5)),
        (Vec2::new(-hw - t * 0.5, 0.0), Vec2::new(t * 0.5, hh + t)),
        (Vec2::new(hw + t * 0.5, 0.0), Vec2::new(t * 0.5, hh + t)),
    ]
}

fn spawn_arena_bounds(mut commands: Commands, cfg: Res<GameConfig>) {
    for (center, half) in arena_walls(cfg.window.width, cfg.window.height) {
        commands.spawn((
            ArenaBound,
            Surface(half),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            groups::arena(),
            Transform::from_translation(center.extend(0.0)),
        ));
    }
}
