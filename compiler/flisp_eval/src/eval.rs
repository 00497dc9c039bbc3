//! The evaluator.
//!
//! Each call applies one rule chosen by the value's variant:
//!
//! | Variant  | Rule                                                  |
//! |----------|-------------------------------------------------------|
//! | `Symbol` | environment lookup                                    |
//! | `SExpr`  | evaluate children, propagate errors, apply the head   |
//! | other    | self-evaluating                                       |
//!
//! Evaluation always terminates: the tree is finite and every reduction
//! consumes part of it.

use flisp_stack::ensure_sufficient_stack;
use flisp_value::{not_a_function, Value};

use crate::builtins;
use crate::environment::Environment;

/// Reduce `value` to its result.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.lookup(&name),
        Value::SExpr(cells) => ensure_sufficient_stack(|| eval_sexpr(env, cells.into_vec())),
        // Quoted lists are data: never reduced here
        other @ (Value::Number(_) | Value::Error(_) | Value::Function(_) | Value::QExpr(_)) => {
            other
        }
    }
}

fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    // Every child is evaluated before any result is inspected, so side
    // effects of later children happen even when an earlier one failed.
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    match cells.len() {
        0 => Value::sexpr_from(cells),
        1 => Value::sexpr_from(cells).take_at(0),
        _ => match cells.remove(0) {
            Value::Function(builtin) => builtins::apply(builtin, env, cells),
            head => {
                tracing::debug!(head = head.type_name(), "application of non-function");
                not_a_function().into()
            }
        },
    }
}
