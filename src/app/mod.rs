pub mod collisions;
pub mod game;
pub mod host;
