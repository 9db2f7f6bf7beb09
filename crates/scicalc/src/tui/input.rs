//! Keyboard bridge: crossterm key events mapped to calculator actions.
//!
//! A character key has exactly the same effect as clicking the button
//! with that label; keys outside the mapping are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character.
    InsertChar(char),
    /// Delete character before cursor (backspace).
    Backspace,
    /// Delete character at cursor.
    Delete,
    /// Move cursor left.
    CursorLeft,
    /// Move cursor right.
    CursorRight,
    /// Move cursor to start.
    CursorHome,
    /// Move cursor to end.
    CursorEnd,
    /// Evaluate the expression.
    Evaluate,
    /// Clear the input and result.
    Clear,
    /// Clear everything including history.
    ClearAll,
    /// Recall last expression from history.
    RecallLast,
    /// Toggle between radians and degrees.
    ToggleAngleMode,
    /// Quit the application.
    Quit,
    /// No action (ignored input).
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearAll,
                KeyCode::Char('d') => KeyAction::ToggleAngleMode,
                KeyCode::Char('a') => KeyAction::CursorHome,
                KeyCode::Char('e') => KeyAction::CursorEnd,
                KeyCode::Char('u') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('=') => KeyAction::Evaluate,
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Home => KeyAction::CursorHome,
            KeyCode::End => KeyAction::CursorEnd,
            KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Esc => KeyAction::Clear,
            KeyCode::Up => KeyAction::RecallLast,
            _ => KeyAction::None,
        }
    }

    /// Returns true for characters that may enter the buffer from the
    /// keyboard: digits, operators, decimal point, and parentheses.
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_digit()
            || c == '.'
            || c == '+'
            || c == '-'
            || c == '*'
            || c == '/'
            || c == '^'
            || c == '%'
            || c == '('
            || c == ')'
            || c == ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for c in ['+', '-', '*', '/', '^', '%', '(', ')', '.'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
    }

    #[test]
    fn test_handle_enter_evaluates() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Evaluate
        );
    }

    #[test]
    fn test_handle_equals_key_evaluates() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Evaluate
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Backspace
        );
    }

    #[test]
    fn test_handle_navigation() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Left)),
            KeyAction::CursorLeft
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Right)),
            KeyAction::CursorRight
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Home)),
            KeyAction::CursorHome
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::End)),
            KeyAction::CursorEnd
        );
    }

    #[test]
    fn test_handle_escape_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Clear
        );
    }

    #[test]
    fn test_handle_up_recalls() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            KeyAction::RecallLast
        );
    }

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_d_toggles_angle_mode() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('d'))),
            KeyAction::ToggleAngleMode
        );
    }

    #[test]
    fn test_handle_ctrl_l_clears_all() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::ClearAll
        );
    }

    #[test]
    fn test_handle_ctrl_unknown_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_unknown_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn test_is_valid_char_accepts_expression_chars() {
        for c in "0123456789.+-*/^%() ".chars() {
            assert!(InputHandler::is_valid_char(c), "'{c}' should be valid");
        }
    }

    #[test]
    fn test_is_valid_char_rejects_letters() {
        for c in ['a', 'z', 'A', '@', '#', '!', '&', '|'] {
            assert!(!InputHandler::is_valid_char(c), "'{c}' should be invalid");
        }
    }
}
