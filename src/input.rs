//! Player intent shared between the event pump and the simulation.
//!
//! The window translates key events into [`Key`] presses and releases; the
//! game reads the accumulated state once per frame.

/// Keys the game reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    /// Net held direction: +1 per held right key, -1 per held left key.
    pub move_direction: i32,
    /// Set on fire key-down; cleared on key-up or once the game consumes it.
    pub fire_pressed: bool,
    /// Cleared by the quit key or a window close request.
    pub running: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_direction: 0,
            fire_pressed: false,
            running: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down edge. Opposing directions add, so holding both cancels out.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.move_direction -= 1,
            Key::Right => self.move_direction += 1,
            Key::Fire => self.fire_pressed = true,
            Key::Quit => self.running = false,
        }
    }

    /// Key-up edge.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.move_direction += 1,
            Key::Right => self.move_direction -= 1,
            Key::Fire => self.fire_pressed = false,
            Key::Quit => {}
        }
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Consume a pending fire request.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        assert_eq!(input.move_direction, 0);
        input.key_up(Key::Left);
        assert_eq!(input.move_direction, 1);
        input.key_up(Key::Right);
        assert_eq!(input.move_direction, 0);
    }

    #[test]
    fn fire_is_consumed_once() {
        let mut input = InputState::new();
        input.key_down(Key::Fire);
        assert!(input.take_fire());
        assert!(!input.take_fire());
    }

    #[test]
    fn quit_clears_running() {
        let mut input = InputState::new();
        assert!(input.running);
        input.key_up(Key::Quit);
        assert!(input.running);
        input.key_down(Key::Quit);
        assert!(!input.running);
    }
}
