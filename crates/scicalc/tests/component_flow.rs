//! End-to-end component behavior: evaluation flow, history view, memory,
//! angle modes, and the bracket short-circuit, driven through the public
//! API exactly as the frontend drives it.

use std::cell::RefCell;
use std::rc::Rc;

use scicalc::prelude::*;

/// Evaluator stub that records every expression it receives.
#[derive(Debug)]
struct RecordingEval {
    calls: Rc<RefCell<Vec<String>>>,
    outcome: CalcResult<f64>,
}

fn recording_calc(outcome: CalcResult<f64>) -> (Calculator, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let eval = RecordingEval {
        calls: Rc::clone(&calls),
        outcome,
    };
    (Calculator::with_evaluator(Box::new(eval)), calls)
}

impl ExpressionEval for RecordingEval {
    fn evaluate(&mut self, expr: &str) -> CalcResult<f64> {
        self.calls.borrow_mut().push(expr.to_string());
        self.outcome.clone()
    }
}

// ===== Evaluation through the real evaluator =====

#[test]
fn adapter_matches_external_evaluator_output() {
    let mut external = FastEvaluator::new();
    let mut calc = Calculator::new();

    for expr in ["1+2", "2*(3+4)", "10/4", "2^8", "sqrt(16)"] {
        calc.set_input(expr);
        calc.evaluate();
        let direct = external.evaluate(expr).unwrap();
        assert_eq!(
            calc.result().parse::<f64>().unwrap(),
            direct,
            "mismatch for {expr}"
        );
    }
}

#[test]
fn degree_mode_changes_trig_results() {
    let mut calc = Calculator::new();
    calc.toggle_angle_mode();
    calc.set_input("sin(30)");
    calc.evaluate();
    assert_eq!(calc.result(), "0.5");
}

#[test]
fn radian_mode_is_evaluator_default() {
    let mut calc = Calculator::new();
    calc.set_input("sin(pi/2)");
    calc.evaluate();
    assert_eq!(calc.result(), "1");
}

#[test]
fn evaluation_failure_is_normalized_to_error() {
    let mut calc = Calculator::new();
    calc.set_input("2+*3");
    calc.evaluate();
    assert_eq!(calc.result(), RESULT_ERROR);
    assert!(calc.history().is_empty());
}

#[test]
fn division_by_zero_is_an_error_display() {
    let mut calc = Calculator::new();
    calc.set_input("1/0");
    calc.evaluate();
    assert_eq!(calc.result(), RESULT_ERROR);
}

// ===== Bracket short-circuit =====

#[test]
fn unbalanced_brackets_short_circuit() {
    let (mut calc, calls) = recording_calc(Ok(3.0));
    calc.set_input("(1+2");
    calc.evaluate();

    assert_eq!(calc.result(), RESULT_UNBALANCED);
    assert!(calc.history().is_empty());
    assert!(
        calls.borrow().is_empty(),
        "evaluator must never see unbalanced input"
    );
}

#[test]
fn balanced_input_reaches_evaluator_once() {
    let (mut calc, calls) = recording_calc(Ok(3.0));
    calc.set_input("(1+2)");
    calc.evaluate();
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calc.result(), "3");
}

// ===== Degree rewrite delegation =====

#[test]
fn degrees_rewrites_only_the_three_trig_names() {
    let (mut calc, calls) = recording_calc(Ok(1.0));
    calc.toggle_angle_mode();
    calc.set_input("sin(30)+sqrt(4)*tangent");
    calc.evaluate();
    assert_eq!(calls.borrow().as_slice(), ["sind(30)+sqrt(4)*tangent"]);
}

#[test]
fn radians_passes_text_unchanged() {
    let (mut calc, calls) = recording_calc(Ok(1.0));
    calc.set_input("sin(30)");
    calc.evaluate();
    assert_eq!(calls.borrow().as_slice(), ["sin(30)"]);
}

// ===== Clear =====

#[test]
fn clear_resets_input_and_result_regardless_of_state() {
    let mut calc = Calculator::new();
    calc.set_input("(1+2");
    calc.evaluate(); // error state
    calc.apply(Action::Clear);
    assert_eq!(calc.input(), "");
    assert_eq!(calc.result(), "");

    calc.set_input("2+2");
    calc.evaluate(); // success state
    calc.apply(Action::Clear);
    assert_eq!(calc.input(), "");
    assert_eq!(calc.result(), "");
}

// ===== Memory =====

#[test]
fn memory_round_trip_is_zero() {
    let mut calc = Calculator::new();
    calc.set_input("5");
    calc.evaluate();
    calc.apply(Action::MemoryAdd);
    calc.apply(Action::MemorySubtract);
    assert_eq!(calc.memory().value(), 0.0);
}

#[test]
fn memory_recall_merges_digits() {
    let mut calc = Calculator::new();
    calc.set_input("3");
    calc.evaluate();
    calc.apply(Action::MemoryAdd);
    calc.apply(Action::Clear);
    calc.apply(Action::Digit(2));
    calc.apply(Action::MemoryRecall);
    assert_eq!(calc.input(), "23");
}

#[test]
fn memory_unparsable_result_treated_as_zero() {
    let mut calc = Calculator::new();
    calc.apply(Action::MemoryAdd); // result is ""
    calc.set_input("oops(");
    calc.evaluate(); // unbalanced -> error string
    calc.apply(Action::MemoryAdd);
    assert_eq!(calc.memory().value(), 0.0);
}

// ===== History =====

#[test]
fn history_keeps_insertion_order() {
    let mut calc = Calculator::new();
    calc.set_input("1+1");
    calc.evaluate();
    calc.set_input("2+2");
    calc.evaluate();
    let displays: Vec<String> = calc.history().iter().map(HistoryEntry::display).collect();
    assert_eq!(displays, vec!["1+1 = 2", "2+2 = 4"]);
}

#[test]
fn history_view_is_tail_of_log() {
    let mut calc = Calculator::new();
    for i in 1..=9 {
        calc.set_input(&format!("{i}+0"));
        calc.evaluate();
    }
    assert_eq!(calc.history().len(), 9);
    let view: Vec<&str> = calc
        .history()
        .recent()
        .iter()
        .map(|e| e.expression.as_str())
        .collect();
    assert_eq!(view, vec!["5+0", "6+0", "7+0", "8+0", "9+0"]);
}

// ===== Keyboard equivalence =====

#[test]
fn key_press_equals_button_press() {
    let mut by_key = App::new();
    by_key.handle_key_action(KeyAction::InsertChar('7'));

    let mut by_button = App::new();
    let idx = by_button.keypad().find_button(Action::Digit(7)).unwrap();
    by_button.press_button(idx);

    assert_eq!(by_key.calc().input(), "7");
    assert_eq!(by_key.calc().input(), by_button.calc().input());
}

#[test]
fn full_keyboard_session() {
    let mut app = App::new();
    for c in "(1+2)*3".chars() {
        app.handle_key_action(KeyAction::InsertChar(c));
    }
    app.handle_key_action(KeyAction::Evaluate);
    assert_eq!(app.calc().result(), "9");
    assert_eq!(app.calc().history().last().unwrap().display(), "(1+2)*3 = 9");
}
