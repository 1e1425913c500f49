use std::collections::HashSet;

use winit::event::VirtualKeyCode;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    LShift,
    RShift,
    Escape,
    L,
    F,
}

impl Key {
    pub fn from_virtual(code: VirtualKeyCode) -> Option<Self> {
        let key = match code {
            VirtualKeyCode::W => Key::W,
            VirtualKeyCode::A => Key::A,
            VirtualKeyCode::S => Key::S,
            VirtualKeyCode::D => Key::D,
            VirtualKeyCode::Q => Key::Q,
            VirtualKeyCode::E => Key::E,
            VirtualKeyCode::LShift => Key::LShift,
            VirtualKeyCode::RShift => Key::RShift,
            VirtualKeyCode::Escape => Key::Escape,
            VirtualKeyCode::L => Key::L,
            VirtualKeyCode::F => Key::F,
            _ => return None,
        };

        Some(key)
    }
}

/// Keys currently held down.
#[derive(Debug, Default, Clone)]
pub struct ActiveKeys {
    pressed: HashSet<Key>,
}

impl ActiveKeys {
    pub fn set(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Either shift key is down.
    pub fn shift(&self) -> bool {
        self.is_pressed(Key::LShift) || self.is_pressed(Key::RShift)
    }

    /// -1, 0 or 1 depending on which of the two keys is held.
    pub fn axis(&self, negative: Key, positive: Key) -> f32 {
        let mut value = 0.0;
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        if self.is_pressed(positive) {
            value += 1.0;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keys = ActiveKeys::default();
        assert!(!keys.is_pressed(Key::W));

        keys.set(Key::W, true);
        keys.set(Key::W, true);
        assert!(keys.is_pressed(Key::W));

        keys.set(Key::W, false);
        assert!(!keys.is_pressed(Key::W));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut keys = ActiveKeys::default();
        keys.set(Key::A, true);
        assert_eq!(keys.axis(Key::A, Key::D), -1.0);

        keys.set(Key::D, true);
        assert_eq!(keys.axis(Key::A, Key::D), 0.0);

        keys.set(Key::A, false);
        assert_eq!(keys.axis(Key::A, Key::D), 1.0);
    }

    #[test]
    fn shift_keys_are_tracked_apart() {
        assert_eq!(Key::from_virtual(VirtualKeyCode::LShift), Some(Key::LShift));
        assert_eq!(Key::from_virtual(VirtualKeyCode::RShift), Some(Key::RShift));
        assert_eq!(Key::from_virtual(VirtualKeyCode::Space), None);
    }

    #[test]
    fn shift_held_until_both_released() {
        let mut keys = ActiveKeys::default();
        keys.set(Key::LShift, true);
        keys.set(Key::RShift, true);

        keys.set(Key::LShift, false);
        assert!(keys.shift());

        keys.set(Key::RShift, false);
        assert!(!keys.shift());
    }
}
