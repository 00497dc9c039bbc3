//! Tests for `def` and variable lookup.

use super::{run, run_in};
use crate::Environment;
use pretty_assertions::assert_eq;

#[test]
fn test_def_then_lookup() {
    let mut env = Environment::with_builtins();
    assert_eq!(run_in(&mut env, "def {x} 5"), "()");
    assert_eq!(run_in(&mut env, "x"), "5");
}

#[test]
fn test_redefine_overwrites() {
    let mut env = Environment::with_builtins();
    let before = env.len();
    run_in(&mut env, "def {x} 5");
    run_in(&mut env, "def {x} 10");
    assert_eq!(run_in(&mut env, "x"), "10");
    assert_eq!(env.len(), before + 1);
}

#[test]
fn test_def_multiple() {
    let mut env = Environment::with_builtins();
    assert_eq!(run_in(&mut env, "def {a b} 5 6"), "()");
    assert_eq!(run_in(&mut env, "+ a b"), "11");
}

#[test]
fn test_def_list_value() {
    let mut env = Environment::with_builtins();
    run_in(&mut env, "def {arglist} {a b x y}");
    assert_eq!(run_in(&mut env, "arglist"), "{a b x y}");
    run_in(&mut env, "def arglist 1 2 3 4");
    assert_eq!(run_in(&mut env, "list a b x y"), "{1 2 3 4}");
}

#[test]
fn test_def_empty_symbol_list() {
    assert_eq!(run("def {}"), "()");
}

#[test]
fn test_def_rebinds_builtin() {
    let mut env = Environment::with_builtins();
    run_in(&mut env, "def {plus} +");
    assert_eq!(run_in(&mut env, "plus 2 3"), "5");
    run_in(&mut env, "def {head} tail");
    assert_eq!(run_in(&mut env, "head {1 2 3}"), "{2 3}");
}

#[test]
fn test_def_errors() {
    assert_eq!(
        run("def 1 2"),
        "Error: Function 'def' passed incorrect type for argument 0! \
         Got Number, Expected Q-Expression."
    );
    assert_eq!(
        run("def {x 1} 2 3"),
        "Error: Function 'def' cannot define non-symbol! Got Number, Expected Symbol."
    );
    assert_eq!(
        run("def {a b} 1"),
        "Error: Function 'def' cannot define incorrect number of values to symbols! \
         Got 1, Expected 2."
    );
    assert_eq!(
        run("def {a} 1 2"),
        "Error: Function 'def' cannot define incorrect number of values to symbols! \
         Got 2, Expected 1."
    );
}

#[test]
fn test_rejected_def_binds_nothing() {
    let mut env = Environment::with_builtins();
    let before = env.len();
    run_in(&mut env, "def {a b 3} 1 2 3");
    run_in(&mut env, "def {c d} 1");
    run_in(&mut env, "def {e} (/ 1 0)");
    assert_eq!(env.len(), before);
    assert_eq!(run_in(&mut env, "a"), "Error: Unbound Symbol 'a'!");
}

#[test]
fn test_bound_values_do_not_alias() {
    let mut env = Environment::with_builtins();
    run_in(&mut env, "def {xs} {1 2}");
    run_in(&mut env, "def {ys} (cons 0 xs)");
    assert_eq!(run_in(&mut env, "xs"), "{1 2}");
    assert_eq!(run_in(&mut env, "ys"), "{0 1 2}");
}

#[test]
fn test_def_result_is_identity_in_expressions() {
    let mut env = Environment::with_builtins();
    assert_eq!(run_in(&mut env, "(def {z} 3)"), "()");
    assert_eq!(run_in(&mut env, "* z z"), "9");
}
