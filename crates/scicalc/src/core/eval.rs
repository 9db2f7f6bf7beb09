//! The evaluation seam: capability trait plus the fasteval-backed
//! production implementation.
//!
//! All parsing and arithmetic is delegated to the external `fasteval`
//! crate; this module only rewrites trig identifiers for degree mode,
//! supplies the namespace (degree variants, constants, `sqrt`), and
//! normalizes failures.

use std::fmt;

use tracing::debug;

use super::{CalcResult, EvalError};

/// Capability interface to the external math evaluator.
///
/// [`crate::core::Calculator`] talks to the evaluator only through this
/// trait, so tests can substitute a recording or failing implementation.
pub trait ExpressionEval: fmt::Debug {
    /// Evaluates an expression to a number.
    fn evaluate(&mut self, expr: &str) -> CalcResult<f64>;
}

/// Production evaluator backed by `fasteval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastEvaluator;

impl FastEvaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Namespace hook consulted by fasteval for names it does not know:
/// bare constants, `sqrt`, and the degree-mode trig variants produced by
/// [`rewrite_degrees`].
fn namespace(name: &str, args: Vec<f64>) -> Option<f64> {
    match (name, args.as_slice()) {
        ("pi", []) => Some(std::f64::consts::PI),
        ("e", []) => Some(std::f64::consts::E),
        ("sqrt", [x]) => Some(x.sqrt()),
        ("ln", [x]) => Some(x.ln()),
        ("sind", [x]) => Some(x.to_radians().sin()),
        ("cosd", [x]) => Some(x.to_radians().cos()),
        ("tand", [x]) => Some(x.to_radians().tan()),
        _ => None,
    }
}

impl ExpressionEval for FastEvaluator {
    fn evaluate(&mut self, expr: &str) -> CalcResult<f64> {
        let mut ns = namespace;
        let value = fasteval::ez_eval(expr, &mut ns).map_err(|e| {
            debug!(expr, error = ?e, "evaluation rejected");
            EvalError::Invalid(format!("{e:?}"))
        })?;

        // fasteval reports division by zero and overflow as inf/NaN
        // rather than as errors; surface both as a failure.
        if !value.is_finite() {
            debug!(expr, value, "non-finite result");
            return Err(EvalError::NonFinite);
        }

        Ok(value)
    }
}

/// Rewrites the identifiers `sin`, `cos`, `tan` to their degree-variant
/// names (`sind`, `cosd`, `tand`).
///
/// The rewrite works on identifier tokens, not raw substrings: an
/// identifier is a maximal `[A-Za-z_][A-Za-z0-9_]*` run, so names that
/// merely contain `sin` (e.g. `asin`, or a hypothetical `tangent`) are
/// never touched.
#[must_use]
pub fn rewrite_degrees(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 8);
    let mut ident = String::new();

    let flush = |out: &mut String, ident: &mut String| {
        match ident.as_str() {
            "sin" => out.push_str("sind"),
            "cos" => out.push_str("cosd"),
            "tan" => out.push_str("tand"),
            _ => out.push_str(ident),
        }
        ident.clear();
    };

    for c in expr.chars() {
        let continues_ident = !ident.is_empty() && (c.is_ascii_alphanumeric() || c == '_');
        if c.is_ascii_alphabetic() || c == '_' || continues_ident {
            ident.push(c);
        } else {
            flush(&mut out, &mut ident);
            out.push(c);
        }
    }
    flush(&mut out, &mut ident);

    out
}

/// Formats a value for the result display: integers without a fraction
/// part, otherwise at most ten decimals with trailing zeros trimmed.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}
