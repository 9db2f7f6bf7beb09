//! Rendering: input field, result line, history panel, status panel,
//! keypad, and help sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::core::{History, RESULT_ERROR};

use super::app::App;
use super::keypad::KeypadWidget;

/// Window title.
pub const TITLE: &str = " scicalc ";

/// Help text for the sidebar.
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Evaluate"),
    ("Esc", "Clear"),
    ("↑", "Recall"),
    ("←/→", "Move cursor"),
    ("Ctrl+D", "Rad/Deg"),
    ("Ctrl+L", "Clear all"),
    ("Ctrl+C", "Quit"),
];

/// Operators help line.
pub const HELP_OPERATORS: &str = "Ops: + - * / % ^ ( )";

/// Renders the whole UI to the frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// The rectangle the keypad is rendered into, for mouse hit tests.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(35),    // Main calculator area
            Constraint::Length(26), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a App,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the UI widget for one frame.
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Main column: input, result, history, status.
    fn main_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Length(3), // Result
                Constraint::Min(7),    // History (5 entries + borders)
                Constraint::Length(4), // Mode / memory status
            ])
            .split(area)
            .to_vec()
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let input_text = self.app.calc().input();
        let cursor_pos = self.app.calc().cursor();

        // Cursor shown as an inverted cell
        let (before, after) = input_text.split_at(cursor_pos.min(input_text.len()));
        let cursor_char = after.chars().next().unwrap_or(' ');
        let after_cursor = if after.len() > 1 {
            &after[cursor_char.len_utf8()..]
        } else {
            ""
        };

        let spans = vec![
            Span::raw(before),
            Span::styled(
                cursor_char.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ),
            Span::raw(after_cursor),
        ];

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(" Expression ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let result_text = self.app.calc().result();

        let style = if result_text.starts_with(RESULT_ERROR) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(result_text, style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .calc()
            .history()
            .recent()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let title = format!(" History (last {}) ", History::DISPLAY_ENTRIES);
        List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calc();
        let memory = calc.memory();

        let mode_line = Line::from(vec![
            Span::raw("Mode: "),
            Span::styled(
                calc.angle_mode().label(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let memory_line = Line::from(vec![
            Span::raw("Memory: "),
            Span::styled(
                crate::core::format_result(memory.value()),
                if memory.is_set() {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]);

        Paragraph::new(vec![mode_line, memory_line])
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(9),    // Shortcuts
                Constraint::Length(3), // Operators
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_layout(area);
        if h_chunks.len() < 3 {
            return;
        }

        let chunks = self.main_layout(h_chunks[0]);
        if chunks.len() >= 4 {
            self.render_input(chunks[0], buf);
            self.render_result(chunks[1], buf);
            self.render_history(chunks[2], buf);
            self.render_status(chunks[3], buf);
        }

        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        self.render_help_sidebar(h_chunks[2], buf);
    }
}
