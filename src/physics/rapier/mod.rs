pub mod groups;
pub mod rapier_physics;

pub use rapier_physics::{set_simulation_active, PhysicsSetupPlugin};
