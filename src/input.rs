use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Direction of travel on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Neighbor expansion order used by the path search.
    pub const SEARCH_ORDER: [Heading; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit `(dx, dy)` offset. Rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level intents produced by the input source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Start,
    Quit,
}

/// Returns whether a heading change is legal (no immediate 180° turns).
#[must_use]
pub fn heading_change_is_valid(current: Heading, next: Heading) -> bool {
    next != current.opposite()
}

/// Maps a raw key press to a game intent.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Some(GameInput::Heading(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Some(GameInput::Heading(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Some(GameInput::Heading(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            Some(GameInput::Heading(Heading::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ' | 'r' | 'R') => Some(GameInput::Start),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Keyboard input source backed by crossterm's event queue.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for the next mappable key press.
    ///
    /// Non-key events and unmapped keys are drained and reported as `None`.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{GameInput, Heading, heading_change_is_valid, map_key_event};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_heading_is_correct() {
        assert_eq!(Heading::Up.opposite(), Heading::Down);
        assert_eq!(Heading::Down.opposite(), Heading::Up);
        assert_eq!(Heading::Left.opposite(), Heading::Right);
        assert_eq!(Heading::Right.opposite(), Heading::Left);
    }

    #[test]
    fn deltas_are_unit_vectors_that_cancel_with_opposite() {
        for heading in Heading::SEARCH_ORDER {
            let (dx, dy) = heading.delta();
            let (ox, oy) = heading.opposite().delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn reverse_change_is_rejected() {
        assert!(!heading_change_is_valid(Heading::Up, Heading::Down));
        assert!(!heading_change_is_valid(Heading::Right, Heading::Left));

        assert!(heading_change_is_valid(Heading::Up, Heading::Left));
        assert!(heading_change_is_valid(Heading::Up, Heading::Up));
    }

    #[test]
    fn arrows_and_wasd_map_to_headings() {
        assert_eq!(
            map_key_event(press(KeyCode::Up)),
            Some(GameInput::Heading(Heading::Up))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('a'))),
            Some(GameInput::Heading(Heading::Left))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('s'))),
            Some(GameInput::Heading(Heading::Down))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Right)),
            Some(GameInput::Heading(Heading::Right))
        );
    }

    #[test]
    fn control_keys_map_to_start_and_quit() {
        assert_eq!(map_key_event(press(KeyCode::Enter)), Some(GameInput::Start));
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
        assert_eq!(map_key_event(press(KeyCode::Tab)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), None);
    }
}
