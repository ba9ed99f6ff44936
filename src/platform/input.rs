//! Input mapping
//!
//! Keyboard, pointer and button events all collapse into two commands.

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    KeyX,
    KeyR,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "KeyX" => Key::KeyX,
            "KeyR" => Key::KeyR,
            _ => Key::Other,
        }
    }

    /// Whether the browser's default action (page scroll) must be suppressed
    pub fn prevents_default(&self) -> bool {
        matches!(self, Key::Space | Key::ArrowUp)
    }
}

/// Raw input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Mouse button or touch on the playfield
    PointerDown,
    RestartButton,
}

/// What the session should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap (restarting first if the round is over)
    Flap,
    /// Start a fresh round immediately
    Restart,
}

impl InputEvent {
    pub fn command(&self) -> Option<Command> {
        match self {
            InputEvent::KeyDown(Key::Space | Key::ArrowUp | Key::KeyX) => Some(Command::Flap),
            InputEvent::KeyDown(Key::KeyR) => Some(Command::Restart),
            InputEvent::KeyDown(Key::Other) => None,
            InputEvent::PointerDown => Some(Command::Flap),
            InputEvent::RestartButton => Some(Command::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_keys() {
        for code in ["Space", "ArrowUp", "KeyX"] {
            let event = InputEvent::KeyDown(Key::from_code(code));
            assert_eq!(event.command(), Some(Command::Flap), "{}", code);
        }
    }

    #[test]
    fn test_restart_sources() {
        assert_eq!(
            InputEvent::KeyDown(Key::from_code("KeyR")).command(),
            Some(Command::Restart)
        );
        assert_eq!(InputEvent::RestartButton.command(), Some(Command::Restart));
    }

    #[test]
    fn test_pointer_flaps() {
        assert_eq!(InputEvent::PointerDown.command(), Some(Command::Flap));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let key = Key::from_code("KeyA");
        assert_eq!(key, Key::Other);
        assert_eq!(InputEvent::KeyDown(key).command(), None);
    }

    #[test]
    fn test_scroll_keys_prevent_default() {
        assert!(Key::Space.prevents_default());
        assert!(Key::ArrowUp.prevents_default());
        assert!(!Key::KeyX.prevents_default());
        assert!(!Key::KeyR.prevents_default());
    }
}
