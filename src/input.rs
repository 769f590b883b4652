//! Keyboard sampling into per-tick snapshots.

use crate::anim::Direction;
use macroquad::input::KeyCode;

/// Raw keyboard queries the core needs from the platform.
pub trait InputSource {
    /// Key is held this tick.
    fn is_down(&self, key: KeyCode) -> bool;
    /// Key went from released to pressed this tick.
    fn is_pressed(&self, key: KeyCode) -> bool;
    /// The platform asked the game to shut down.
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Which keys drive which action. Any key in a list triggers the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Move up.
    pub up: Vec<KeyCode>,
    /// Move down.
    pub down: Vec<KeyCode>,
    /// Move left.
    pub left: Vec<KeyCode>,
    /// Move right.
    pub right: Vec<KeyCode>,
    /// Pause/resume the music (edge-triggered).
    pub toggle_audio: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::W, KeyCode::Up],
            down: vec![KeyCode::S, KeyCode::Down],
            left: vec![KeyCode::A, KeyCode::Left],
            right: vec![KeyCode::D, KeyCode::Right],
            toggle_audio: vec![KeyCode::Q],
        }
    }
}

/// Input of a single tick.
///
/// Built fresh from the [`InputSource`] every tick and dropped afterwards,
/// so nothing carries over from one tick to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Up held.
    pub up: bool,
    /// Down held.
    pub down: bool,
    /// Left held.
    pub left: bool,
    /// Right held.
    pub right: bool,
    /// Toggle key pressed on this very tick.
    pub toggle_audio: bool,
}

impl InputSnapshot {
    /// Sample `source` through `bindings`.
    pub fn sample(source: &impl InputSource, bindings: &KeyBindings) -> Self {
        let held = |keys: &[KeyCode]| keys.iter().any(|&k| source.is_down(k));
        Self {
            up: held(&bindings.up),
            down: held(&bindings.down),
            left: held(&bindings.left),
            right: held(&bindings.right),
            toggle_audio: bindings.toggle_audio.iter().any(|&k| source.is_pressed(k)),
        }
    }

    /// Any direction held.
    #[inline]
    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Facing picked by the held flags: the last one in the order
    /// up, down, left, right wins.
    pub fn facing(&self) -> Option<Direction> {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter(|(held, _)| *held)
        .map(|(_, dir)| dir)
        .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Keys {
        down: HashSet<KeyCode>,
        pressed: HashSet<KeyCode>,
    }

    impl InputSource for Keys {
        fn is_down(&self, key: KeyCode) -> bool {
            self.down.contains(&key)
        }
        fn is_pressed(&self, key: KeyCode) -> bool {
            self.pressed.contains(&key)
        }
    }

    #[test]
    fn arrows_and_wasd_are_equivalent() {
        let bindings = KeyBindings::default();
        let mut keys = Keys::default();
        keys.down.insert(KeyCode::Up);
        keys.down.insert(KeyCode::A);

        let snap = InputSnapshot::sample(&keys, &bindings);
        assert!(snap.up && snap.left);
        assert!(!snap.down && !snap.right);
        assert!(!snap.toggle_audio);
    }

    #[test]
    fn toggle_uses_press_edge_not_hold() {
        let bindings = KeyBindings::default();
        let mut keys = Keys::default();
        keys.down.insert(KeyCode::Q);
        assert!(!InputSnapshot::sample(&keys, &bindings).toggle_audio);

        keys.pressed.insert(KeyCode::Q);
        assert!(InputSnapshot::sample(&keys, &bindings).toggle_audio);
    }

    #[test]
    fn facing_is_none_without_directions() {
        let snap = InputSnapshot {
            toggle_audio: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snap.facing(), None);
        assert!(!snap.any_direction());
    }
}
