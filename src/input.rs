//! Key-event decoding and dispatch for the game loop.

use crate::game::logic::{process_input, SessionInput};
use crate::game::types::Session;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running the loop.
    Continue,
    /// Player quit; tear down the terminal and exit.
    Quit,
}

/// Decode a raw key event into a semantic session input.
pub fn map_key(key: KeyEvent) -> Option<SessionInput> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => None,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(SessionInput::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SessionInput::Restart),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(SessionInput::ToggleAutopilot),
        _ => Some(SessionInput::Other),
    }
}

/// Feed one key event through the session. Quit keys short-circuit; all
/// other keys are resolved against the current phase by the state machine.
pub fn handle_key(session: &mut Session, key: KeyEvent, now_ms: i64) -> InputResult {
    match map_key(key) {
        None => InputResult::Quit,
        Some(input) => {
            process_input(session, input, now_ms);
            InputResult::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::SessionPhase;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), None);
        assert_eq!(map_key(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_flap_aliases() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(key(code)), Some(SessionInput::Flap));
        }
    }

    #[test]
    fn test_unmapped_key_is_other() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), Some(SessionInput::Other));
    }

    #[test]
    fn test_handle_key_quit() {
        let mut session = Session::new(0);
        assert_eq!(
            handle_key(&mut session, key(KeyCode::Char('q')), 0),
            InputResult::Quit
        );
    }

    #[test]
    fn test_handle_key_starts_game() {
        let mut session = Session::new(0);
        let result = handle_key(&mut session, key(KeyCode::Char(' ')), 100);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(session.phase, SessionPhase::Playing);
    }
}
