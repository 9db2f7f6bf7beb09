//! Parenthesis balance pre-check.
//!
//! Run before every evaluation; a failure short-circuits the evaluator
//! entirely. This checks bracket balance only, not operator/operand
//! syntax — the evaluator owns full syntax checking.

/// Returns `true` iff every `)` closes a previously opened `(` and no
/// `(` is left open at the end. The empty string is balanced.
#[must_use]
pub fn balanced(expr: &str) -> bool {
    let mut open = Vec::new();
    for c in expr.chars() {
        match c {
            '(' => open.push(c),
            ')' => {
                if open.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_simple() {
        assert!(balanced("(1+2)"));
    }

    #[test]
    fn test_unclosed_open() {
        assert!(!balanced("(1+2"));
    }

    #[test]
    fn test_close_before_open() {
        assert!(!balanced(")("));
    }

    #[test]
    fn test_empty_is_balanced() {
        assert!(balanced(""));
    }

    #[test]
    fn test_nested() {
        assert!(balanced("((1+2)*(3-4))"));
        assert!(!balanced("((1+2)*(3-4)"));
    }

    #[test]
    fn test_stray_close() {
        assert!(!balanced("1+2)"));
    }

    #[test]
    fn test_non_bracket_chars_ignored() {
        assert!(balanced("sin(30) + cos(60)"));
    }
}
