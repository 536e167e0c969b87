//! Contact bookkeeping for the player: which solid surfaces it touches and
//! whether one of them is underfoot.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Grounded, Player, Surface, SurfaceContacts};
use crate::core::config::GameConfig;
use crate::core::system::system_order::ContactSet;
use crate::gameplay::motion::MotionInput;

const LOG_TARGET: &str = "physics";
/// Vertical slack between feet and surface top, world units.
pub const GROUND_TOLERANCE: f32 = 2.0;

/// Split a collision event into its pair and whether contact started.
pub fn contact_pair(event: &CollisionEvent) -> (Entity, Entity, bool) {
    match *event {
        CollisionEvent::Started(a, b, _) => (a, b, true),
        CollisionEvent::Stopped(a, b, _) => (a, b, false),
    }
}

/// Order a pair so the side matching `pred` comes first.
pub fn oriented(a: Entity, b: Entity, pred: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    if pred(a) {
        Some((a, b))
    } else if pred(b) {
        Some((b, a))
    } else {
        None
    }
}

/// Whether a box resting at `body` (centre, half extents) sits on top of `surface`.
pub fn rests_on(body: Vec2, body_half: Vec2, surface: Vec2, surface_half: Vec2) -> bool {
    let feet = body.y - body_half.y;
    let top = surface.y + surface_half.y;
    let overlaps_x = (body.x - surface.x).abs() < body_half.x + surface_half.x;
    overlaps_x && (feet - top).abs() <= GROUND_TOLERANCE
}

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_surface_contacts, update_grounded)
                .chain()
                .in_set(ContactSet),
        );
    }
}

pub fn track_surface_contacts(
    mut events: EventReader<CollisionEvent>,
    surfaces: Query<(), With<Surface>>,
    mut players: Query<&mut SurfaceContacts, With<Player>>,
) {
    for event in events.read() {
        let (a, b, started) = contact_pair(event);
        let Some((player, other)) = oriented(a, b, |e| players.contains(e)) else {
            continue;
        };
        if !surfaces.contains(other) {
            continue;
        }
        let Ok(mut contacts) = players.get_mut(player) else {
            continue;
        };
        if started {
            if !contacts.0.contains(&other) {
                contacts.0.push(other);
            }
        } else {
            contacts.0.retain(|e| *e != other);
        }
    }
}

pub fn update_grounded(
    cfg: Res<GameConfig>,
    surfaces: Query<(&Surface, &Transform), Without<Player>>,
    mut players: Query<(&SurfaceContacts, &Transform, &mut Grounded), With<Player>>,
    motion: Option<ResMut<MotionInput>>,
) {
    let half = cfg.player.size.to_vec2() * 0.5;
    let mut any_grounded = false;
    for (contacts, tf, mut grounded) in &mut players {
        let body = tf.translation.truncate();
        let now = contacts.0.iter().any(|e| {
            surfaces
                .get(*e)
                .is_ok_and(|(s, stf)| rests_on(body, half, stf.translation.truncate(), s.0))
        });
        if grounded.0 != now {
            grounded.0 = now;
            debug!(target: LOG_TARGET, grounded = now, contacts = contacts.0.len(), "grounded changed");
        }
        any_grounded |= now;
    }
    if let Some(mut motion) = motion {
        if motion.grounded != any_grounded {
            motion.grounded = any_grounded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

    #[test]
    fn rests_on_needs_feet_at_the_top_and_horizontal_overlap() {
        let half = Vec2::new(16.0, 24.0);
        let ground = Vec2::new(0.0, -16.0);
        let ground_half = Vec2::new(200.0, 16.0);
        assert!(rests_on(Vec2::new(0.0, 24.0), half, ground, ground_half));
        assert!(rests_on(Vec2::new(0.0, 25.5), half, ground, ground_half));
        assert!(!rests_on(Vec2::new(0.0, 40.0), half, ground, ground_half), "airborne");
        assert!(!rests_on(Vec2::new(230.0, 24.0), half, ground, ground_half), "off the edge");
        // Touching a wall from the side is not standing on it.
        assert!(!rests_on(Vec2::new(-216.0, -10.0), half, ground, ground_half));
    }

    #[test]
    fn oriented_puts_the_matching_side_first() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        assert_eq!(oriented(a, b, |e| e == b), Some((b, a)));
        assert_eq!(oriented(a, b, |e| e == a), Some((a, b)));
        assert_eq!(oriented(a, b, |_| false), None);
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<CollisionEvent>();
        app.insert_resource(GameConfig::default());
        app.init_resource::<MotionInput>();
        app.add_plugins(ContactPlugin);
        app
    }

    #[test]
    fn contact_events_drive_grounded_flag() {
        let mut app = app();
        let ground = app
            .world_mut()
            .spawn((
                Surface(Vec2::new(200.0, 16.0)),
                Transform::from_xyz(0.0, -16.0, 0.0),
            ))
            .id();
        let player = app
            .world_mut()
            .spawn((
                Player,
                SurfaceContacts::default(),
                Grounded::default(),
                Transform::from_xyz(0.0, 24.0, 0.0),
            ))
            .id();

        app.world_mut().send_event(CollisionEvent::Started(
            ground,
            player,
            CollisionEventFlags::empty(),
        ));
        app.update();
        assert!(app.world().get::<Grounded>(player).is_some_and(|g| g.0));
        assert!(app.world().resource::<MotionInput>().grounded);

        app.world_mut().send_event(CollisionEvent::Stopped(
            player,
            ground,
            CollisionEventFlags::empty(),
        ));
        app.update();
        assert!(app.world().get::<Grounded>(player).is_some_and(|g| !g.0));
        assert!(!app.world().resource::<MotionInput>().grounded);
    }

    #[test]
    fn touching_a_surface_from_below_is_not_grounded() {
        let mut app = app();
        let shelf = app
            .world_mut()
            .spawn((
                Surface(Vec2::new(100.0, 16.0)),
                Transform::from_xyz(0.0, 100.0, 0.0),
            ))
            .id();
        let player = app
            .world_mut()
            .spawn((
                Player,
                SurfaceContacts::default(),
                Grounded::default(),
                Transform::from_xyz(0.0, 60.0, 0.0),
            ))
            .id();
        app.world_mut().send_event(CollisionEvent::Started(
            player,
            shelf,
            CollisionEventFlags::empty(),
        ));
        app.update();
        assert!(app.world().get::<Grounded>(player).is_some_and(|g| !g.0));
        assert_eq!(
            app.world().get::<SurfaceContacts>(player).map(|c| c.0.len()),
            Some(1)
        );
    }
}
