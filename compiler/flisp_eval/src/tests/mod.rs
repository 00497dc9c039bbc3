//! Language-level tests: source text through parse, read and eval.

mod eval_tests;
mod variables_tests;

use crate::{eval, read, Environment};
use flisp_parse::parse;

/// Evaluate `source` in `env` and return the printed result.
fn run_in(env: &mut Environment, source: &str) -> String {
    let tree = parse(source).unwrap();
    eval(env, read(&tree)).to_string()
}

/// Evaluate `source` in a fresh environment with the builtins registered.
fn run(source: &str) -> String {
    run_in(&mut Environment::with_builtins(), source)
}
