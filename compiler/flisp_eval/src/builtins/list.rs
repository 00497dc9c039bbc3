//! List builtins: `list head tail init last join cons len eval`.

use flisp_value::{incorrect_type, integer_overflow, EvalError, Value};

use super::args::{arity_error, expect_non_empty, expect_qexpr, take_args};
use super::BuiltinResult;
use crate::environment::Environment;
use crate::eval::eval as eval_value;

/// `list a b ...` → `{a b ...}`.
pub(super) fn list(args: Vec<Value>) -> Value {
    Value::sexpr_from(args).into_qexpr()
}

/// `head {a b ...}` → `{a}`.
pub(super) fn head(args: Vec<Value>) -> BuiltinResult {
    let mut cells = non_empty_list("head", args)?;
    cells.truncate(1);
    Ok(Value::qexpr_from(cells))
}

/// `tail {a b ...}` → `{b ...}`.
pub(super) fn tail(args: Vec<Value>) -> BuiltinResult {
    let mut list = Value::qexpr_from(non_empty_list("tail", args)?);
    drop(list.pop_at(0));
    Ok(list)
}

/// `init {... y z}` → `{... y}`.
pub(super) fn init(args: Vec<Value>) -> BuiltinResult {
    let mut cells = non_empty_list("init", args)?;
    cells.pop();
    Ok(Value::qexpr_from(cells))
}

/// `last {... y z}` → `{z}`.
pub(super) fn last(args: Vec<Value>) -> BuiltinResult {
    let mut cells = non_empty_list("last", args)?;
    let last = cells.split_off(cells.len() - 1);
    Ok(Value::qexpr_from(last))
}

/// `join {a} {b c} ...` → `{a b c ...}`.
pub(super) fn join(args: Vec<Value>) -> BuiltinResult {
    if args.is_empty() {
        return Err(arity_error("join", 1, 0));
    }
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(expect_qexpr("join", index, arg)?);
    }
    Ok(Value::qexpr_from(joined))
}

/// `cons a {b c}` → `{a b c}`.
pub(super) fn cons(args: Vec<Value>) -> BuiltinResult {
    let [value, list] = take_args::<2>("cons", args)?;
    let mut cells = expect_qexpr("cons", 1, list)?;
    expect_non_empty("cons", &cells)?;
    cells.insert(0, value);
    Ok(Value::qexpr_from(cells))
}

/// `len {a b c}` → `3`.
pub(super) fn len(args: Vec<Value>) -> BuiltinResult {
    let [list] = take_args::<1>("len", args)?;
    let cells = expect_qexpr("len", 0, list)?;
    let count = i64::try_from(cells.len()).map_err(|_| integer_overflow())?;
    Ok(Value::number(count))
}

/// `eval {f a b}` → result of evaluating `(f a b)`.
pub(super) fn eval(env: &mut Environment, args: Vec<Value>) -> BuiltinResult {
    let [list] = take_args::<1>("eval", args)?;
    if !list.is_qexpr() {
        return Err(incorrect_type("eval", 0, "Q-Expression", list.type_name()));
    }
    Ok(eval_value(env, list.into_sexpr()))
}

/// The sole argument of `function`, which must be a non-empty q-expression.
fn non_empty_list(function: &'static str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let [list] = take_args::<1>(function, args)?;
    let cells = expect_qexpr(function, 0, list)?;
    expect_non_empty(function, &cells)?;
    Ok(cells)
}
