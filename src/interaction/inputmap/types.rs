use bevy::prelude::*;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Reset,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Reset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
            Action::Reset => "reset",
        }
    }
}

pub type KeyList = SmallVec<[KeyCode; 2]>;

/// Keys bound to each action. Any bound key activates the action.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputMap {
    pub left: KeyList,
    pub right: KeyList,
    pub up: KeyList,
    pub down: KeyList,
    pub reset: KeyList,
}

impl InputMap {
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Reset => &self.reset,
        }
    }

    pub fn keys_mut(&mut self, action: Action) -> &mut KeyList {
        match action {
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
            Action::Reset => &mut self.reset,
        }
    }

    pub fn pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        self.keys(action).iter().any(|k| keyboard.pressed(*k))
    }

    pub fn just_pressed(&self, action: Action, keyboard: &ButtonInput<KeyCode>) -> bool {
        self.keys(action).iter().any(|k| keyboard.just_pressed(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_bound_key_activates_the_action() {
        let mut map = InputMap::default();
        map.keys_mut(Action::Left).extend([KeyCode::ArrowLeft, KeyCode::KeyA]);
        let mut keyboard = ButtonInput::<KeyCode>::default();
        assert!(!map.pressed(Action::Left, &keyboard));
        keyboard.press(KeyCode::KeyA);
        assert!(map.pressed(Action::Left, &keyboard));
        assert!(map.just_pressed(Action::Left, &keyboard));
        assert!(!map.pressed(Action::Right, &keyboard));
        keyboard.clear();
        assert!(map.pressed(Action::Left, &keyboard));
        assert!(!map.just_pressed(Action::Left, &keyboard));
    }
}
