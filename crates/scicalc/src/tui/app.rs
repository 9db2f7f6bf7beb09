//! TUI application shell.
//!
//! Owns the [`Calculator`] plus the purely-presentational bits: the
//! keypad highlight state and the quit flag. Key and mouse input both
//! funnel into [`App::apply`], which keeps keyboard/button equivalence by
//! construction.

use crate::core::{Action, Calculator};

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;

/// The running application.
#[derive(Debug)]
pub struct App {
    calc: Calculator,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an app with a fresh calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates an app around an existing calculator (used by tests and by
    /// the binary to honor CLI flags).
    #[must_use]
    pub fn with_calculator(calc: Calculator) -> Self {
        Self {
            calc,
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// The calculator state.
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// Mutable access to the calculator state.
    pub fn calc_mut(&mut self) -> &mut Calculator {
        &mut self.calc
    }

    /// The keypad (for rendering and hit tests).
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches a calculator action and highlights its button.
    pub fn apply(&mut self, action: Action) {
        self.keypad.highlight_action(action);
        self.calc.apply(action);
    }

    /// Activates the keypad button at `index` (mouse click path).
    pub fn press_button(&mut self, index: usize) {
        if let Some(action) = self.keypad.get_button(index).map(|b| b.action) {
            self.apply(action);
        }
    }

    /// Routes a mapped key event into the calculator.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) if InputHandler::is_valid_char(c) => {
                // A character key is the same as its button where one
                // exists; whitespace has no button and inserts directly.
                match Action::from_char(c) {
                    Some(action) => self.apply(action),
                    None => self.calc.insert_char(c),
                }
            }
            KeyAction::InsertChar(_) => {}
            KeyAction::Backspace => self.apply(Action::Backspace),
            KeyAction::Delete => self.calc.delete_forward(),
            KeyAction::CursorLeft => self.calc.move_cursor_left(),
            KeyAction::CursorRight => self.calc.move_cursor_right(),
            KeyAction::CursorHome => self.calc.move_cursor_start(),
            KeyAction::CursorEnd => self.calc.move_cursor_end(),
            KeyAction::Evaluate => self.apply(Action::Equals),
            KeyAction::Clear => self.apply(Action::Clear),
            KeyAction::ClearAll => self.calc.clear_all(),
            KeyAction::RecallLast => self.calc.recall_last(),
            KeyAction::ToggleAngleMode => self.apply(Action::ToggleAngleMode),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
