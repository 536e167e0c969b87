//! Session state machine: score, star row, bombs and the Playing/GameOver cycle.

pub mod controller;
pub mod state;

pub use controller::{ResetReport, SessionController};
pub use state::{ResetTrigger, ScoreState, SessionPhase, SessionState, StarId, StarRow, StarSlot};
