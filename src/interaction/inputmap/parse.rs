use bevy::input::keyboard::KeyCode;

use super::types::{Action, InputMap};
use crate::core::config::InputConfig;

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

/// Build the key map from config. Unknown key names are reported and skipped;
/// an action left without keys keeps the default arrow/R binding.
pub fn parse_input_config(cfg: &InputConfig) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let fallback = InputConfig::default();
    for action in Action::ALL {
        let mut keys = Vec::new();
        for name in names(cfg, action) {
            match parse_keycode(name) {
                Ok(kc) if keys.contains(&kc) => {
                    result.errors.push(format!("[{}] duplicate key '{}'", action.name(), name));
                }
                Ok(kc) => keys.push(kc),
                Err(e) => result.errors.push(format!("[{}] {e}", action.name())),
            }
        }
        if keys.is_empty() {
            result
                .errors
                .push(format!("[{}] no usable keys; using default", action.name()));
            keys.extend(names(&fallback, action).iter().filter_map(|n| parse_keycode(n).ok()));
        }
        result.input_map.keys_mut(action).extend(keys);
    }
    result
}

fn names(cfg: &InputConfig, action: Action) -> &[String] {
    match action {
        Action::Left => &cfg.left,
        Action::Right => &cfg.right,
        Action::Up => &cfg.up,
        Action::Down => &cfg.down,
        Action::Reset => &cfg.reset,
    }
}

pub fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let name = name.strip_prefix("Key:").unwrap_or(name).trim();
    let kc = match name {
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
        "ArrowRight" | "Right" => KeyCode::ArrowRight,
        "ArrowUp" | "Up" => KeyCode::ArrowUp,
        "ArrowDown" | "Down" => KeyCode::ArrowDown,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "A" | "KeyA" => KeyCode::KeyA,
        "D" | "KeyD" => KeyCode::KeyD,
        "R" | "KeyR" => KeyCode::KeyR,
        "S" | "KeyS" => KeyCode::KeyS,
        "W" | "KeyW" => KeyCode::KeyW,
        "F5" => KeyCode::F5,
        other => return Err(format!("Unsupported KeyCode '{}' (extend parser)", other)),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_arrows_and_r() {
        let parsed = parse_input_config(&InputConfig::default());
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(parsed.input_map.keys(Action::Left), &[KeyCode::ArrowLeft]);
        assert_eq!(parsed.input_map.keys(Action::Up), &[KeyCode::ArrowUp]);
        assert_eq!(parsed.input_map.keys(Action::Reset), &[KeyCode::KeyR]);
    }

    #[test]
    fn aliases_and_prefix_are_accepted() {
        assert_eq!(parse_keycode("Key:KeyA"), Ok(KeyCode::KeyA));
        assert_eq!(parse_keycode("W"), Ok(KeyCode::KeyW));
        assert_eq!(parse_keycode("Left"), Ok(KeyCode::ArrowLeft));
        assert!(parse_keycode("Banana").is_err());
    }

    #[test]
    fn bad_names_are_reported_and_empty_actions_fall_back() {
        let cfg = InputConfig {
            left: vec!["KeyA".into(), "Nope".into(), "KeyA".into()],
            up: vec!["Nope".into()],
            ..InputConfig::default()
        };
        let parsed = parse_input_config(&cfg);
        assert_eq!(parsed.input_map.keys(Action::Left), &[KeyCode::KeyA]);
        assert_eq!(parsed.input_map.keys(Action::Up), &[KeyCode::ArrowUp]);
        assert_eq!(parsed.errors.len(), 4, "{:?}", parsed.errors);
    }
}
