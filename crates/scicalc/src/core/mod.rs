//! Calculator core: state, actions, and the evaluator seam.
//!
//! Everything in this module is UI-agnostic. The terminal frontend in
//! [`crate::tui`] drives it exclusively through [`Calculator::apply`].

pub mod action;
pub mod brackets;
pub mod calculator;
pub mod eval;
pub mod history;
pub mod memory;

pub use action::{Action, Constant, Function};
pub use calculator::Calculator;
pub use eval::{format_result, ExpressionEval, FastEvaluator};
pub use history::{History, HistoryEntry};
pub use memory::MemoryRegister;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for fallible core operations.
pub type CalcResult<T> = Result<T, EvalError>;

/// Fixed result string shown for any evaluator failure.
pub const RESULT_ERROR: &str = "Error";

/// Fixed result string shown when the bracket pre-check fails.
pub const RESULT_UNBALANCED: &str = "Error: unbalanced brackets";

/// Interpretation of trigonometric function arguments.
///
/// Affects only the textual rewrite performed before delegation to the
/// evaluator; past history entries and the current result are never
/// recomputed on toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    /// Arguments are radians (evaluator default).
    #[default]
    Radians,
    /// Arguments are degrees; `sin`/`cos`/`tan` are rewritten to their
    /// degree variants before evaluation.
    Degrees,
}

impl AngleMode {
    /// Returns the opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Short label for display ("Rad" / "Deg").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Radians => "Rad",
            Self::Degrees => "Deg",
        }
    }
}

/// Errors surfaced by the evaluation seam.
///
/// These never reach the user verbatim; [`Calculator`] normalizes all of
/// them to [`RESULT_ERROR`] (or [`RESULT_UNBALANCED`] for the pre-check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The bracket pre-check failed; the evaluator was never invoked.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,
    /// The external evaluator rejected the expression.
    #[error("invalid expression: {0}")]
    Invalid(String),
    /// The evaluator produced NaN or an infinity.
    #[error("non-finite result")]
    NonFinite,
}
