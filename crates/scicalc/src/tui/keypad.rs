//! On-screen button grid.
//!
//! Buttons carry the same [`Action`] values the keyboard bridge produces,
//! so clicking a button and pressing the matching key are literally the
//! same code path. The grid is mouse-clickable via [`Keypad::hit_test`]
//! and highlights the button for the most recent action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Action, Constant, Function};

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button label (may be multi-character, e.g. `sin(`).
    pub label: &'static str,
    /// Whether the button is currently pressed/highlighted.
    pub pressed: bool,
    /// The action this button dispatches.
    pub action: Action,
}

impl KeypadButton {
    /// Creates a button.
    #[must_use]
    pub fn new(label: &'static str, action: Action) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, row-major:
/// ```text
/// [  7 ] [  8 ] [  9 ] [  / ]
/// [  4 ] [  5 ] [  6 ] [  * ]
/// [  1 ] [  2 ] [  3 ] [  - ]
/// [  0 ] [  . ] [  = ] [  + ]
/// [  ( ] [  ) ] [  ^ ] [  C ]
/// [sin(] [cos(] [tan(] [sqrt(]
/// [log(] [ pi ] [ M+ ] [ M- ]
/// [ MR ] [ MC ] [ D/R] [ DEL]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order.
    buttons: Vec<KeypadButton>,
    /// Number of columns.
    cols: usize,
    /// Number of rows.
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard scientific keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 /
            KeypadButton::new("7", Action::Digit(7)),
            KeypadButton::new("8", Action::Digit(8)),
            KeypadButton::new("9", Action::Digit(9)),
            KeypadButton::new("/", Action::Operator('/')),
            // Row 2: 4 5 6 *
            KeypadButton::new("4", Action::Digit(4)),
            KeypadButton::new("5", Action::Digit(5)),
            KeypadButton::new("6", Action::Digit(6)),
            KeypadButton::new("*", Action::Operator('*')),
            // Row 3: 1 2 3 -
            KeypadButton::new("1", Action::Digit(1)),
            KeypadButton::new("2", Action::Digit(2)),
            KeypadButton::new("3", Action::Digit(3)),
            KeypadButton::new("-", Action::Operator('-')),
            // Row 4: 0 . = +
            KeypadButton::new("0", Action::Digit(0)),
            KeypadButton::new(".", Action::Decimal),
            KeypadButton::new("=", Action::Equals),
            KeypadButton::new("+", Action::Operator('+')),
            // Row 5: ( ) ^ C
            KeypadButton::new("(", Action::OpenParen),
            KeypadButton::new(")", Action::CloseParen),
            KeypadButton::new("^", Action::Operator('^')),
            KeypadButton::new("C", Action::Clear),
            // Row 6: trig + sqrt
            KeypadButton::new("sin(", Action::Function(Function::Sin)),
            KeypadButton::new("cos(", Action::Function(Function::Cos)),
            KeypadButton::new("tan(", Action::Function(Function::Tan)),
            KeypadButton::new("sqrt(", Action::Function(Function::Sqrt)),
            // Row 7: log, pi, memory
            KeypadButton::new("log(", Action::Function(Function::Log)),
            KeypadButton::new("pi", Action::Constant(Constant::Pi)),
            KeypadButton::new("M+", Action::MemoryAdd),
            KeypadButton::new("M-", Action::MemorySubtract),
            // Row 8: memory recall/clear, angle toggle, backspace
            KeypadButton::new("MR", Action::MemoryRecall),
            KeypadButton::new("MC", Action::MemoryClear),
            KeypadButton::new("D/R", Action::ToggleAngleMode),
            KeypadButton::new("DEL", Action::Backspace),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 8,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its action.
    #[must_use]
    pub fn find_button(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Sets a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for an action, releasing all others.
    pub fn highlight_action(&mut self, action: Action) {
        self.release_all();
        if let Some(idx) = self.find_button(action) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered keypad area to a
    /// button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || (inner.height as usize) < self.keypad.rows {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
                    Action::Operator(_) | Action::OpenParen | Action::CloseParen => {
                        Style::default().fg(Color::Yellow)
                    }
                    Action::Equals => Style::default().fg(Color::Green),
                    Action::Clear | Action::Backspace => Style::default().fg(Color::Red),
                    Action::MemoryAdd
                    | Action::MemorySubtract
                    | Action::MemoryRecall
                    | Action::MemoryClear => Style::default().fg(Color::Magenta),
                    Action::Function(_) | Action::Constant(_) | Action::ToggleAngleMode => {
                        Style::default().fg(Color::Cyan)
                    }
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
