pub mod parse;
pub mod plugin;
pub mod systems;
pub mod types;
