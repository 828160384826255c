use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::super::{Input, Movements};
use crate::options::KeyBindings;

#[derive(Copy, Clone, Debug, Default)]
/// Represents the state of a keyboard.
///
/// Keys are matched by physical position, so the default bindings land on
/// the same keys whatever the layout.
pub struct Keyboard {
    bindings: KeyBindings,
    held: Movements,
}

impl Keyboard {
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: Movements::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let Some(movement) = self.bindings.lookup(key) else {
            return;
        };

        match state {
            ElementState::Pressed => self.held.accumulate(movement),
            ElementState::Released => self.held.deccumulate(movement),
        }
        tracing::trace!(?key, ?movement, ?state, "Movement key");
    }

    /// Release every held key when the window loses focus, since the
    /// matching key-up events go to another window.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused && !self.held.is_empty() {
            tracing::trace!("Focus lost, releasing held movement keys");
            self.held = Movements::default();
        }
    }

    #[must_use]
    pub const fn held(&self) -> Movements {
        self.held
    }
}

impl super::Controller for Keyboard {
    fn handle_event(&mut self, event: &Event<()>) {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(*key, *state),
            WindowEvent::Focused(focused) => self.handle_focus(*focused),
            _ => {}
        }
    }

    /// Held keys keep producing movement every frame until released.
    fn fetch_input(&mut self) -> Vec<Input> {
        self.held.iter().map(Input::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Controller;
    use super::*;
    use crate::control::Movement;

    #[test]
    fn held_keys_repeat_until_released() {
        let mut keyboard = Keyboard::default();
        keyboard.handle_key(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key(KeyCode::Space, ElementState::Pressed);

        let expected = vec![Input::Move(Movement::Forward), Input::Move(Movement::Up)];
        assert_eq!(keyboard.fetch_input(), expected);
        assert_eq!(keyboard.fetch_input(), expected);

        keyboard.handle_key(KeyCode::KeyW, ElementState::Released);
        assert_eq!(keyboard.fetch_input(), vec![Input::Move(Movement::Up)]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut keyboard = Keyboard::default();
        keyboard.handle_key(KeyCode::KeyP, ElementState::Pressed);
        assert!(keyboard.held().is_empty());
        assert!(keyboard.fetch_input().is_empty());
    }

    #[test]
    fn losing_focus_releases_held_keys() {
        let mut keyboard = Keyboard::default();
        keyboard.handle_key(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key(KeyCode::KeyD, ElementState::Pressed);

        keyboard.handle_focus(true);
        assert_eq!(keyboard.fetch_input().len(), 2);

        keyboard.handle_focus(false);
        assert!(keyboard.held().is_empty());
        assert!(keyboard.fetch_input().is_empty());
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let bindings = KeyBindings {
            forward: KeyCode::ArrowUp,
            ..KeyBindings::default()
        };
        let mut keyboard = Keyboard::new(bindings);

        keyboard.handle_key(KeyCode::KeyW, ElementState::Pressed);
        assert!(keyboard.held().is_empty());

        keyboard.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        assert!(keyboard.held().contains(Movement::Forward));
    }
}
