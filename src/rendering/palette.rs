//! Flat colours used when textures are disabled, plus HUD colours.
use bevy::prelude::*;

pub const SKY: Color = Color::srgb(0.38, 0.64, 0.93);
pub const GROUND: Color = Color::srgb(0.22, 0.55, 0.24);
pub const PLAYER: Color = Color::srgb(0.55, 0.36, 0.80);
pub const STAR: Color = Color::srgb(1.0, 0.85, 0.20);
pub const BOMB: Color = Color::srgb(0.12, 0.12, 0.14);

/// Player tint after touching a bomb (0xff0000).
pub const HIT_TINT: Color = Color::srgb(1.0, 0.0, 0.0);

pub const HUD_TEXT: Color = Color::BLACK;
pub const BUTTON_IDLE: Color = Color::srgba(0.05, 0.05, 0.08, 0.6);
pub const BUTTON_HOVER: Color = Color::srgba(0.08, 0.08, 0.12, 0.7);
pub const BUTTON_PRESSED: Color = Color::srgba(0.15, 0.15, 0.25, 0.8);
