//! scicalc binary: terminal setup, event loop, teardown.

use std::io::{self, Stdout};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scicalc::core::Calculator;
use scicalc::tui::{keypad_area, render, App, InputHandler};

/// Terminal scientific calculator.
#[derive(Debug, Parser)]
#[command(name = "scicalc", version, about)]
struct Args {
    /// Start in degree mode instead of radians.
    #[arg(long)]
    degrees: bool,

    /// Increase log verbosity (logs go to stderr; also honors RUST_LOG).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Scoped ownership of the terminal's raw mode, alternate screen, and
/// mouse capture. Restores the terminal on drop, so every exit path
/// (including errors) releases the global input subscription.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl std::fmt::Debug for TerminalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalGuard").finish_non_exhaustive()
    }
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            // The guard does not exist yet, so undo raw mode by hand.
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restoration failures are unreportable at this point; the
        // process is exiting either way.
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut calc = Calculator::new();
    if args.degrees {
        calc.toggle_angle_mode();
    }
    let mut app = App::with_calculator(calc);

    info!(degrees = args.degrees, "starting");

    let mut guard = TerminalGuard::acquire()?;
    let result = run(&mut guard.terminal, &mut app);
    drop(guard);

    result
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(app, f))?;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key_action(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    let keypad = keypad_area(frame);
                    if let Some(idx) = app.keypad().hit_test(keypad, mouse.column, mouse.row) {
                        app.press_button(idx);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
