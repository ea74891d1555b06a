//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical keys the game reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    Escape,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Confirm,
        Key::Back,
        Key::Escape,
    ];

    pub fn index(&self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Confirm => 4,
            Key::Back => 5,
            Key::Escape => 6,
        }
    }
}

/// Map keyboard input to game keys.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        // Movement / menu navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Key::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::Right)
        }

        // Menu actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Confirm),
        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => Some(Key::Back),
        KeyCode::Esc => Some(Key::Escape),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_direction_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Key::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Key::Right));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Key::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L'))), Some(Key::Right));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Key::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Backspace)), Some(Key::Back));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }

    #[test]
    fn test_key_indices_are_dense() {
        for (i, k) in Key::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }
}
