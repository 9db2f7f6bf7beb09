//! Terminal frontend: app shell, keyboard bridge, keypad, rendering.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::App;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render};
