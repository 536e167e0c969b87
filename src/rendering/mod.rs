pub mod animation;
pub mod assets;
pub mod camera;
pub mod hud;
pub mod palette;
