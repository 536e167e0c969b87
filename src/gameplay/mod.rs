pub mod motion;
pub mod scene;
pub mod session;
pub mod spawn;
