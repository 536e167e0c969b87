use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// A point in screen space: origin top-left, y grows downward.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}
impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Star Catcher".into(),
            auto_close: 0.0,
        }
    }
}
impl WindowConfig {
    /// Screen space (top-left origin, y down) to Bevy world space (centre origin, y up).
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width * 0.5, self.height * 0.5 - screen.y)
    }
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width * 0.5, self.height * 0.5 - world.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    pub pixels_per_meter: f32,
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 300.0,
            pixels_per_meter: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: ScreenPoint,
    pub size: ScreenPoint,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub bounce: f32,
    /// Extra body gravity on top of the world gravity.
    pub extra_gravity: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: ScreenPoint::new(100.0, 450.0),
            size: ScreenPoint::new(32.0, 48.0),
            run_speed: 160.0,
            jump_speed: 430.0,
            bounce: 0.2,
            extra_gravity: 200.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    pub start_x: f32,
    pub step_x: f32,
    pub y: f32,
    pub size: f32,
    pub bounce: SpawnRange<f32>,
}
impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 12,
            start_x: 12.0,
            step_x: 70.0,
            y: 0.0,
            size: 24.0,
            bounce: SpawnRange { min: 0.4, max: 0.8 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BombConfig {
    /// Player x below this spawns the bomb in `right_side`, otherwise in `left_side`.
    pub split_x: f32,
    pub left_side: SpawnRange<f32>,
    pub right_side: SpawnRange<f32>,
    pub spawn_y: f32,
    pub velocity_x: SpawnRange<f32>,
    pub velocity_y: f32,
    pub radius: f32,
    pub scale: f32,
    pub bounce: f32,
}
impl Default for BombConfig {
    fn default() -> Self {
        Self {
            split_x: 400.0,
            left_side: SpawnRange { min: 0.0, max: 400.0 },
            right_side: SpawnRange { min: 400.0, max: 800.0 },
            spawn_y: 20.0,
            velocity_x: SpawnRange {
                min: -200.0,
                max: 200.0,
            },
            velocity_y: 20.0,
            radius: 7.0,
            scale: 1.7,
            bounce: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlatformConfig {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}
impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlatformsConfig {
    /// Unscaled platform texture size.
    pub base_size: ScreenPoint,
    pub layout: Vec<PlatformConfig>,
}
impl Default for PlatformsConfig {
    fn default() -> Self {
        Self {
            base_size: ScreenPoint::new(400.0, 32.0),
            layout: vec![
                PlatformConfig { x: 400.0, y: 568.0, scale: 2.0 },
                PlatformConfig { x: 400.0, y: 400.0, scale: 1.0 },
                PlatformConfig { x: 50.0, y: 250.0, scale: 1.0 },
                PlatformConfig { x: 750.0, y: 220.0, scale: 1.0 },
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub score: ScreenPoint,
    pub high_score: ScreenPoint,
    pub font_size: f32,
    pub reset_button: ScreenPoint,
    pub reset_button_size: ScreenPoint,
}
impl Default for HudConfig {
    fn default() -> Self {
        Self {
            score: ScreenPoint::new(16.0, 16.0),
            high_score: ScreenPoint::new(480.0, 16.0),
            font_size: 32.0,
            reset_button: ScreenPoint::new(370.0, 30.0),
            reset_button_size: ScreenPoint::new(66.0, 24.0),
        }
    }
}

/// Key names per action; parsed by `interaction::inputmap::parse`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub reset: Vec<String>,
}
impl Default for InputConfig {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into()],
            right: vec!["ArrowRight".into()],
            up: vec!["ArrowUp".into()],
            down: vec!["ArrowDown".into()],
            reset: vec!["KeyR".into()],
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub stars: StarConfig,
    pub bombs: BombConfig,
    pub platforms: PlatformsConfig,
    pub hud: HudConfig,
    pub input: InputConfig,
    /// Load sprite textures from `assets/`; flat coloured sprites otherwise.
    pub textures: bool,
    pub rapier_debug: bool,
    pub seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            world: Default::default(),
            player: Default::default(),
            stars: Default::default(),
            bombs: Default::default(),
            platforms: Default::default(),
            hud: Default::default(),
            input: Default::default(),
            textures: false,
            rapier_debug: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge RON layers key by key (later paths win) and deserialize the result.
    /// Returns the config, the paths that were applied and per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    /// Sanity warnings; never fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.world.gravity <= 0.0 {
            w.push(format!(
                "world.gravity {} should be positive (screen space, pointing down)",
                self.world.gravity
            ));
        }
        if self.world.pixels_per_meter <= 0.0 {
            w.push("world.pixels_per_meter must be > 0".into());
        }
        if self.player.run_speed <= 0.0 {
            w.push("player.run_speed must be > 0".into());
        }
        if self.player.jump_speed <= 0.0 {
            w.push("player.jump_speed must be > 0; the player cannot jump".into());
        }
        if self.player.size.x <= 0.0 || self.player.size.y <= 0.0 {
            w.push("player.size must be > 0 on both axes".into());
        }
        if self.stars.count == 0 {
            w.push("stars.count is 0; rounds can never complete".into());
        }
        let last_star_x = self.stars.start_x + self.stars.step_x * self.stars.count.saturating_sub(1) as f32;
        if last_star_x > self.window.width {
            w.push(format!(
                "star row ends at x={last_star_x}, outside the {}px arena",
                self.window.width
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min >= r.max {
                w.push(format!(
                    "{label} min ({}) must be less than max ({})",
                    r.min, r.max
                ));
            }
        }
        check_range_f32(&mut w, "stars.bounce", &self.stars.bounce);
        check_range_f32(&mut w, "bombs.left_side", &self.bombs.left_side);
        check_range_f32(&mut w, "bombs.right_side", &self.bombs.right_side);
        check_range_f32(&mut w, "bombs.velocity_x", &self.bombs.velocity_x);
        if !(0.0..=self.window.width).contains(&self.bombs.split_x) {
            w.push(format!(
                "bombs.split_x {} outside the arena 0..{}",
                self.bombs.split_x, self.window.width
            ));
        }
        if self.bombs.radius <= 0.0 || self.bombs.scale <= 0.0 {
            w.push("bombs.radius and bombs.scale must be > 0".into());
        }
        if self.platforms.layout.is_empty() {
            w.push("platforms.layout is empty; everything falls to the arena floor".into());
        }
        if self.platforms.layout.iter().any(|p| p.scale <= 0.0) {
            w.push("platform scale must be > 0".into());
        }
        if self.input.left.is_empty() || self.input.right.is_empty() || self.input.up.is_empty() {
            w.push("input: left/right/up each need at least one key".into());
        }
        w
    }

    /// Star grid slot positions (screen space) in spawn order.
    pub fn star_slots(&self) -> Vec<Vec2> {
        (0..self.stars.count)
            .map(|i| Vec2::new(self.stars.start_x + self.stars.step_x * i as f32, self.stars.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arena_layout() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.platforms.layout.len(), 4);
        assert_eq!(cfg.stars.count, 12);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn star_slots_step_across_the_row() {
        let slots = GameConfig::default().star_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0], Vec2::new(12.0, 0.0));
        assert_eq!(slots[1], Vec2::new(82.0, 0.0));
        assert_eq!(slots[11], Vec2::new(782.0, 0.0));
    }

    #[test]
    fn screen_world_conversion_round_trips_corners() {
        let w = WindowConfig::default();
        assert_eq!(w.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(w.to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(w.to_screen(Vec2::ZERO), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn validate_flags_inverted_ranges_and_empty_rows() {
        let mut cfg = GameConfig::default();
        cfg.stars.count = 0;
        cfg.bombs.velocity_x = SpawnRange { min: 5.0, max: -5.0 };
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("stars.count")));
        assert!(warnings.iter().any(|w| w.contains("bombs.velocity_x")));
    }

    #[test]
    fn layered_merge_adds_new_keys_and_recurses_into_existing_ones() {
        use std::io::Write;
        let mut base = tempfile::NamedTempFile::new().unwrap();
        let mut local = tempfile::NamedTempFile::new().unwrap();
        base.write_all(b"(bombs: (radius: 9.0), hud: (font_size: 20.0))").unwrap();
        local
            .write_all(b"(bombs: (bounce: 0.5), stars: (count: 4))")
            .unwrap();
        let (cfg, used, errors) = GameConfig::load_layered([base.path(), local.path()]);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.bombs.radius, 9.0);
        assert_eq!(cfg.bombs.bounce, 0.5);
        assert_eq!(cfg.hud.font_size, 20.0);
        assert_eq!(cfg.stars.count, 4);
    }

    #[test]
    fn partial_ron_keeps_defaults_for_missing_sections() {
        let cfg: GameConfig = ron::from_str("(player: (run_speed: 200.0), seed: Some(9))").unwrap();
        assert_eq!(cfg.player.run_speed, 200.0);
        assert_eq!(cfg.player.jump_speed, 430.0);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.stars, StarConfig::default());
    }
}
