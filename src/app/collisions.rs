use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::host::BevyHost;
use crate::core::components::{Bomb, Player, PlayerReach, Star};
use crate::gameplay::scene::SceneCallbacks;
use crate::gameplay::session::{SessionController, StarId};
use crate::physics::contacts::{contact_pair, oriented};

/// Contacts that matter to the session, gathered from one tick of events.
#[derive(Debug, Default, PartialEq)]
pub struct TickContacts {
    pub stars: Vec<StarId>,
    pub bomb_hit: bool,
}

/// Hand star overlaps and bomb hits to the controller. Stars are applied first.
pub fn route_collisions(
    mut events: EventReader<CollisionEvent>,
    reach: Query<(), With<PlayerReach>>,
    players: Query<(), With<Player>>,
    stars: Query<&Star>,
    bombs: Query<(), With<Bomb>>,
    mut controller: ResMut<SessionController>,
    mut host: BevyHost,
) {
    let mut tick = TickContacts::default();
    for event in events.read() {
        let (a, b, started) = contact_pair(event);
        if !started {
            continue;
        }
        if let Some((_, other)) = oriented(a, b, |e| reach.contains(e)) {
            if let Ok(star) = stars.get(other) {
                tick.stars.push(star.0);
            }
        } else if let Some((_, other)) = oriented(a, b, |e| players.contains(e)) {
            tick.bomb_hit |= bombs.contains(other);
        }
    }
    if !tick.stars.is_empty() {
        controller.collect_stars(&mut host, &tick.stars);
    }
    if tick.bomb_hit {
        controller.on_bomb_hit(&mut host);
    }
}
