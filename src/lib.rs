pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::gameplay::scene::{CollectOutcome, SceneCallbacks, SceneHost};
pub use crate::gameplay::session::{ScoreState, SessionController, SessionPhase, StarId};
