pub mod camera;
pub mod controller;

/// A translation request, one per held movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    #[must_use]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Everything a controller can ask a camera to do in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Move(Movement),
    /// Horizontal look delta, raw pointer units.
    Yaw(f32),
    /// Vertical look delta, raw pointer units, positive is up.
    Pitch(f32),
    /// Field of view delta in degrees, positive widens the view.
    Zoom(f32),
}

impl From<Movement> for Input {
    fn from(movement: Movement) -> Self {
        Self::Move(movement)
    }
}

/// Set of held movements, packed into a byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movements(u8);

impl Movements {
    pub fn accumulate(&mut self, movement: Movement) {
        self.0 |= movement.bit();
    }

    pub fn deccumulate(&mut self, movement: Movement) {
        self.0 &= !movement.bit();
    }

    #[must_use]
    pub const fn contains(self, movement: Movement) -> bool {
        self.0 & movement.bit() == movement.bit()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Movement> {
        Movement::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movements_track_held_keys() {
        let mut held = Movements::default();
        assert!(held.is_empty());

        held.accumulate(Movement::Forward);
        held.accumulate(Movement::Left);
        held.accumulate(Movement::Forward);
        assert!(held.contains(Movement::Forward));
        assert!(held.contains(Movement::Left));
        assert!(!held.contains(Movement::Down));

        held.deccumulate(Movement::Forward);
        assert_eq!(held.iter().collect::<Vec<_>>(), vec![Movement::Left]);
    }

    #[test]
    fn releasing_an_unheld_key_is_harmless() {
        let mut held = Movements::default();
        held.deccumulate(Movement::Up);
        assert!(held.is_empty());
    }
}
