pub mod contacts;
pub mod rapier;

pub use contacts::ContactPlugin;
pub use rapier::PhysicsSetupPlugin;
