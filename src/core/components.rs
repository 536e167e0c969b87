use bevy::prelude::*;

use crate::gameplay::session::StarId;

/// The single player body.
#[derive(Component)]
pub struct Player;

/// Sensor collider attached to the player; overlaps stars without pushing them.
#[derive(Component)]
pub struct PlayerReach;

/// One slot of the fixed star row.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star(pub StarId);

#[derive(Component)]
pub struct Bomb;

#[derive(Component)]
pub struct Platform;

/// Arena wall keeping the player and bombs on screen.
#[derive(Component)]
pub struct ArenaBound;

/// Solid, axis-aligned surface the player can stand on. Half extents in world units.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct Surface(pub Vec2);

/// Solid surfaces currently in contact with the player, fed from collision events.
#[derive(Component, Debug, Default, Clone)]
pub struct SurfaceContacts(pub Vec<Entity>);

/// Whether the player currently stands on a surface.
#[derive(Component, Debug, Default, Deref, DerefMut, Copy, Clone, PartialEq, Eq)]
pub struct Grounded(pub bool);

#[derive(Component)]
pub struct Backdrop;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HighScoreText;

#[derive(Component)]
pub struct ResetButton;
