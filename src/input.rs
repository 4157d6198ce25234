use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the per-tick cell offset for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Direction(Direction),
    StartOrRestart,
    Quit,
}

/// Polls terminal key events and maps them to game inputs.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    /// Creates a handler that waits up to `poll_timeout` per poll.
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Waits up to the poll timeout for one key event.
    ///
    /// Returns `Ok(None)` when no key arrived in time or the key is unbound.
    pub fn poll_event(&self) -> io::Result<Option<InputEvent>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputEvent::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(InputEvent::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputEvent::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
            Some(InputEvent::StartOrRestart)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{map_key, Direction, InputEvent};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn delta_matches_screen_axes() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let arrow = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let wasd = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);

        assert_eq!(map_key(arrow), Some(InputEvent::Direction(Direction::Up)));
        assert_eq!(map_key(wasd), Some(InputEvent::Direction(Direction::Right)));
    }

    #[test]
    fn control_c_quits_regardless_of_bindings() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let unbound = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(unbound), None);
    }
}
