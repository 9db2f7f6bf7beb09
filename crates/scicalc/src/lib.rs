//! scicalc - terminal scientific calculator
//!
//! A single interactive calculator component: expression buffer, external
//! evaluator (via the `fasteval` crate), single-slot memory register,
//! session history, and a degree/radian angle mode, with a ratatui
//! frontend whose keypad buttons and keyboard bridge share one action
//! type.
//!
//! # Example
//!
//! ```rust
//! use scicalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.set_input("sqrt(9)+1");
//! calc.evaluate();
//! assert_eq!(calc.result(), "4");
//! assert_eq!(calc.history().last().unwrap().display(), "sqrt(9)+1 = 4");
//! ```

// Allow common test patterns in this crate's test modules
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Action, AngleMode, CalcResult, Calculator, Constant, EvalError, ExpressionEval,
        FastEvaluator, Function, History, HistoryEntry, MemoryRegister, RESULT_ERROR,
        RESULT_UNBALANCED,
    };
    pub use crate::tui::{App, InputHandler, KeyAction, Keypad};
}
