use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete player request decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Intent {
    MoveLeft,
    MoveRight,
    ReleaseLeft,
    ReleaseRight,
    Rotate,
    SoftDropOn,
    SoftDropOff,
    TogglePause,
    /// Start a fresh game from the idle or game-over screen.
    Start,
    /// Throw away the current game and start another.
    Restart,
    Quit,
}

impl Intent {
    /// Decodes a key event.
    ///
    /// Terminal auto-repeat events are dropped; holding a key is handled by
    /// [`KeyRepeat`](super::KeyRepeat) and the drop clock instead.
    pub(crate) fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            return event.is_press().then_some(Intent::Quit);
        }
        match event.kind {
            KeyEventKind::Press => Self::from_press(event.code),
            KeyEventKind::Release => Self::from_release(event.code),
            KeyEventKind::Repeat => None,
        }
    }

    fn from_press(code: KeyCode) -> Option<Self> {
        let intent = match code {
            KeyCode::Left => Intent::MoveLeft,
            KeyCode::Right => Intent::MoveRight,
            KeyCode::Up => Intent::Rotate,
            KeyCode::Down => Intent::SoftDropOn,
            KeyCode::Char('p') => Intent::TogglePause,
            KeyCode::Enter | KeyCode::Char('s') => Intent::Start,
            KeyCode::Char('r') => Intent::Restart,
            KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
            _ => return None,
        };
        Some(intent)
    }

    fn from_release(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left => Some(Intent::ReleaseLeft),
            KeyCode::Right => Some(Intent::ReleaseRight),
            KeyCode::Down => Some(Intent::SoftDropOff),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_mapping() {
        let cases = [
            (KeyCode::Left, Intent::MoveLeft),
            (KeyCode::Right, Intent::MoveRight),
            (KeyCode::Up, Intent::Rotate),
            (KeyCode::Down, Intent::SoftDropOn),
            (KeyCode::Char('p'), Intent::TogglePause),
            (KeyCode::Enter, Intent::Start),
            (KeyCode::Char('r'), Intent::Restart),
            (KeyCode::Esc, Intent::Quit),
        ];
        for (code, intent) in cases {
            assert_eq!(
                Intent::from_key_event(&key(code, KeyEventKind::Press)),
                Some(intent),
                "{code:?}"
            );
        }
        assert_eq!(
            Intent::from_key_event(&key(KeyCode::Char('x'), KeyEventKind::Press)),
            None
        );
    }

    #[test]
    fn test_release_mapping() {
        assert_eq!(
            Intent::from_key_event(&key(KeyCode::Left, KeyEventKind::Release)),
            Some(Intent::ReleaseLeft)
        );
        assert_eq!(
            Intent::from_key_event(&key(KeyCode::Down, KeyEventKind::Release)),
            Some(Intent::SoftDropOff)
        );
        assert_eq!(
            Intent::from_key_event(&key(KeyCode::Up, KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn test_terminal_repeat_is_dropped() {
        assert_eq!(
            Intent::from_key_event(&key(KeyCode::Left, KeyEventKind::Repeat)),
            None
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut event = key(KeyCode::Char('c'), KeyEventKind::Press);
        event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(Intent::from_key_event(&event), Some(Intent::Quit));
    }
}
