pub mod config;

pub use config::{
    BombConfig, GameConfig, HudConfig, InputConfig, PlatformConfig, PlatformsConfig,
    PlayerConfig, ScreenPoint, SpawnRange, StarConfig, WindowConfig, WorldConfig,
};
