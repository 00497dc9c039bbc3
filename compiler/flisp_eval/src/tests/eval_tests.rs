//! Tests for the evaluation rules themselves.

use super::{run, run_in};
use crate::{eval, Builtin, Environment, Value};
use flisp_value::division_by_zero;
use pretty_assertions::assert_eq;

#[test]
fn test_self_evaluating_values() {
    let mut env = Environment::new();
    for value in [
        Value::number(3),
        Value::from(division_by_zero()),
        Value::function(Builtin::Add),
        Value::qexpr_from(vec![Value::symbol("unbound"), Value::sexpr()]),
    ] {
        assert_eq!(eval(&mut env, value.clone()), value);
    }
}

#[test]
fn test_symbol_lookup() {
    let mut env = Environment::new();
    env.define("x", &Value::number(9));
    assert_eq!(eval(&mut env, Value::symbol("x")), Value::number(9));
    assert_eq!(
        eval(&mut env, Value::symbol("y")).to_string(),
        "Error: Unbound Symbol 'y'!"
    );
}

#[test]
fn test_empty_and_single() {
    assert_eq!(run(""), "()");
    assert_eq!(run("()"), "()");
    assert_eq!(run("(5)"), "5");
    assert_eq!(run("((((5))))"), "5");
    assert_eq!(run("(())"), "()");
}

#[test]
fn test_builtin_by_itself() {
    assert_eq!(run("head"), "<function>");
    assert_eq!(run("(+)"), "<function>");
}

#[test]
fn test_application() {
    assert_eq!(run("+ 1 2"), "3");
    assert_eq!(run("(+ 1 2)"), "3");
    assert_eq!(run("+ 1 (* 2 3) (- 10 4)"), "13");
}

#[test]
fn test_non_function_head() {
    assert_eq!(run("(1 2)"), "Error: first element is not a function!");
    assert_eq!(run("{+} 1 2"), "Error: first element is not a function!");
    assert_eq!(run("(() 1)"), "Error: first element is not a function!");
}

#[test]
fn test_quoted_lists_are_not_evaluated() {
    assert_eq!(run("{1 (+ 1 1) x}"), "{1 (+ 1 1) x}");
    assert_eq!(run("{}"), "{}");
}

#[test]
fn test_unbound_symbol() {
    assert_eq!(run("foo"), "Error: Unbound Symbol 'foo'!");
    assert_eq!(run("(bar 1 2)"), "Error: Unbound Symbol 'bar'!");
}

#[test]
fn test_invalid_number_propagates() {
    assert_eq!(run("+ 1 99999999999999999999"), "Error: Invalid number!");
}

#[test]
fn test_first_error_wins() {
    assert_eq!(run("+ (/ 1 0) (head {})"), "Error: Division by zero!");
    assert_eq!(run("+ (head {}) (/ 1 0)"), "Error: Function 'head' passed {}!");
}

#[test]
fn test_error_in_head_position() {
    assert_eq!(run("(nope) 1"), "Error: Unbound Symbol 'nope'!");
}

#[test]
fn test_all_children_evaluated_before_errors() {
    // The failing middle child does not stop the later definition
    let mut env = Environment::with_builtins();
    assert_eq!(
        run_in(&mut env, "(def {a} 1) (/ 1 0) (def {b} 2)"),
        "Error: Division by zero!"
    );
    assert_eq!(run_in(&mut env, "a"), "1");
    assert_eq!(run_in(&mut env, "b"), "2");
}

#[test]
fn test_list_eval_bridge() {
    assert_eq!(run("eval (list 1 2 3)"), run("(1 2 3)"));
    assert_eq!(run("eval (list + 1 2 3)"), run("(+ 1 2 3)"));
}

#[test]
fn test_deep_nesting() {
    let depth = 1_000;
    let source = format!("{}1{}", "(+ 1 ".repeat(depth), ")".repeat(depth));
    assert_eq!(run(&source), (depth + 1).to_string());
}

fn deep_quoted(depth: usize) -> String {
    format!("{}1{}", "{".repeat(depth), "}".repeat(depth))
}

#[test]
fn test_deep_quoted_value_round_trip() {
    let source = deep_quoted(50_000);
    assert_eq!(run(&source), source);
}

#[test]
fn test_deep_value_through_def_and_eval() {
    let depth = 50_000;
    let mut env = Environment::with_builtins();
    let source = format!("def {{x}} {}", deep_quoted(depth));
    assert_eq!(run_in(&mut env, &source), "()");
    assert_eq!(run_in(&mut env, "len {x x}"), "2");

    // Unwrapping one level with eval leaves the rest quoted
    assert_eq!(run_in(&mut env, "eval x"), deep_quoted(depth - 1));

    // Redefining releases the old deep binding
    assert_eq!(run_in(&mut env, "def {x} 0"), "()");
    assert_eq!(run_in(&mut env, "x"), "0");
}
