//! Central system ordering labels to make the frame sequence explicit.
//! 1. Input (key state -> `MotionInput`)
//! 2. Contacts (collision events -> grounded flag, star/bomb routing)
//! 3. Session (controller update, reset trigger)
//! 4. Rapier step (handled by plugin, PostUpdate)
//! 5. Presentation (animation frames, HUD)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ContactSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SessionSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet;
