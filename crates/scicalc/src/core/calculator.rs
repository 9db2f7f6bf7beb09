//! The calculator component: one struct owning all session state.
//!
//! The UI drives it through [`Calculator::apply`]; nothing here knows
//! about terminals or widgets.

use tracing::debug;

use super::action::Action;
use super::brackets;
use super::eval::{format_result, rewrite_degrees, ExpressionEval, FastEvaluator};
use super::history::History;
use super::memory::MemoryRegister;
use super::{AngleMode, RESULT_ERROR, RESULT_UNBALANCED};

/// All state for one calculator session.
#[derive(Debug)]
pub struct Calculator {
    /// Expression being built. Any string is representable; validity is
    /// checked only at evaluation time.
    input: String,
    /// Cursor position in the input (byte offset; input stays ASCII
    /// through the button/key paths).
    cursor: usize,
    /// Result display string; empty until an evaluation has run.
    result: String,
    memory: MemoryRegister,
    mode: AngleMode,
    history: History,
    evaluator: Box<dyn ExpressionEval>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator backed by the production evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(FastEvaluator::new()))
    }

    /// Creates a calculator with a custom evaluator (the test seam).
    #[must_use]
    pub fn with_evaluator(evaluator: Box<dyn ExpressionEval>) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            result: String::new(),
            memory: MemoryRegister::new(),
            mode: AngleMode::default(),
            history: History::new(),
            evaluator,
        }
    }

    /// Current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position within the input.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current result display string.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The memory register.
    #[must_use]
    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    /// Current angle mode.
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.mode
    }

    /// The calculation history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replaces the buffer wholesale (direct-edit path) and puts the
    /// cursor at the end.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.cursor = self.input.len();
    }

    /// Inserts token text at the cursor. With the cursor at the end this
    /// is plain concatenation, exactly like pressing the button.
    pub fn append(&mut self, token: &str) {
        self.input.insert_str(self.cursor, token);
        self.cursor += token.len();
    }

    /// Inserts a single character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the character before the cursor; no-op at the start.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.input.remove(self.cursor);
        }
    }

    /// Removes the character at the cursor; no-op at the end.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    /// Moves the cursor one character left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of the input.
    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the input.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Clears the buffer and the result display. History and memory are
    /// untouched.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.result.clear();
    }

    /// Clears the buffer, result, and history. Memory is untouched.
    pub fn clear_all(&mut self) {
        self.clear();
        self.history.clear();
    }

    /// Switches between radians and degrees. Never recomputes anything.
    pub fn toggle_angle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// M+: adds the current result (or 0) to memory.
    pub fn memory_add(&mut self) {
        self.memory.add(&self.result);
    }

    /// M-: subtracts the current result (or 0) from memory.
    pub fn memory_subtract(&mut self) {
        self.memory.subtract(&self.result);
    }

    /// MR: appends memory's value to the buffer by raw concatenation, the
    /// same as typing its digits.
    pub fn memory_recall(&mut self) {
        let text = format_result(self.memory.value());
        self.append(&text);
    }

    /// MC: resets memory to zero.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Loads the most recent history entry back into the buffer.
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            self.input = entry.expression.clone();
            self.cursor = self.input.len();
        }
    }

    /// Runs the bracket check, then delegates the (possibly
    /// degree-rewritten) buffer to the evaluator.
    ///
    /// Successful results are formatted and recorded in the history under
    /// the original (pre-rewrite) input. Any failure becomes a fixed
    /// display string and leaves the history alone; nothing propagates.
    pub fn evaluate(&mut self) {
        if self.input.is_empty() {
            return;
        }

        if !brackets::balanced(&self.input) {
            debug!(input = %self.input, "bracket check failed");
            self.result = RESULT_UNBALANCED.to_string();
            return;
        }

        let expr = match self.mode {
            AngleMode::Radians => self.input.clone(),
            AngleMode::Degrees => rewrite_degrees(&self.input),
        };

        match self.evaluator.evaluate(&expr) {
            Ok(value) => {
                self.result = format_result(value);
                self.history.record(&self.input, &self.result);
                debug!(input = %self.input, result = %self.result, "evaluated");
            }
            Err(e) => {
                debug!(input = %self.input, error = %e, "evaluation failed");
                self.result = RESULT_ERROR.to_string();
            }
        }
    }

    /// Dispatches one action. Exhaustive over every variant.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(_)
            | Action::Decimal
            | Action::Operator(_)
            | Action::OpenParen
            | Action::CloseParen
            | Action::Function(_)
            | Action::Constant(_) => {
                if let Some(token) = action.token() {
                    self.append(&token);
                }
            }
            Action::Equals => self.evaluate(),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryClear => self.memory_clear(),
            Action::ToggleAngleMode => self.toggle_angle_mode(),
        }
    }
}
