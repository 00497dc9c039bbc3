//! Argument checks shared by the builtins.

use flisp_value::{
    empty_list, incorrect_type, too_few_arguments, too_many_arguments, EvalError, Value,
};

/// Take exactly `N` arguments.
pub(super) fn take_args<const N: usize>(
    function: &'static str,
    args: Vec<Value>,
) -> Result<[Value; N], EvalError> {
    <[Value; N]>::try_from(args).map_err(|args| arity_error(function, N, args.len()))
}

pub(super) fn arity_error(function: &'static str, expected: usize, got: usize) -> EvalError {
    if got > expected {
        too_many_arguments(function, expected, got)
    } else {
        too_few_arguments(function, expected, got)
    }
}

/// Unwrap argument `index` as the cells of a q-expression.
pub(super) fn expect_qexpr(
    function: &'static str,
    index: usize,
    value: Value,
) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(cells) => Ok(cells.into_vec()),
        other => Err(incorrect_type(
            function,
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

/// Unwrap argument `index` as a number.
pub(super) fn expect_number(
    function: &'static str,
    index: usize,
    value: &Value,
) -> Result<i64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(incorrect_type(function, index, "Number", other.type_name())),
    }
}

pub(super) fn expect_non_empty(function: &'static str, cells: &[Value]) -> Result<(), EvalError> {
    if cells.is_empty() {
        Err(empty_list(function))
    } else {
        Ok(())
    }
}
