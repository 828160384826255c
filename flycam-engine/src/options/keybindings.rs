use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::control::Movement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Physical keys bound to each movement, named as winit `KeyCode`s
/// (e.g. `"KeyW"`, `"ShiftLeft"`).
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::Space,
            down: KeyCode::ShiftLeft,
        }
    }
}

impl KeyBindings {
    /// Look up the movement bound to a key. When a key is bound twice the
    /// first movement in `Movement::ALL` order wins.
    #[must_use]
    pub fn lookup(&self, key: KeyCode) -> Option<Movement> {
        Movement::ALL
            .into_iter()
            .find(|movement| self.key(*movement) == key)
    }

    #[must_use]
    pub const fn key(&self, movement: Movement) -> KeyCode {
        match movement {
            Movement::Forward => self.forward,
            Movement::Backward => self.backward,
            Movement::Left => self.left,
            Movement::Right => self.right,
            Movement::Up => self.up,
            Movement::Down => self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookup() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup(KeyCode::KeyW), Some(Movement::Forward));
        assert_eq!(bindings.lookup(KeyCode::ShiftLeft), Some(Movement::Down));
        assert_eq!(bindings.lookup(KeyCode::KeyZ), None);
    }

    #[test]
    fn duplicate_binding_resolves_to_first_movement() {
        let bindings = KeyBindings {
            down: KeyCode::KeyW,
            ..KeyBindings::default()
        };
        assert_eq!(bindings.lookup(KeyCode::KeyW), Some(Movement::Forward));
    }
}
