//! Variable builtins: `def`.

use flisp_value::{define_count_mismatch, define_non_symbol, Value};

use super::args::{arity_error, expect_qexpr};
use super::BuiltinResult;
use crate::environment::Environment;

/// `def {a b} 1 2` binds `a` to 1 and `b` to 2, returning `()`.
///
/// Every check runs before the first binding, so a rejected call leaves the
/// environment untouched.
pub(super) fn def(env: &mut Environment, args: Vec<Value>) -> BuiltinResult {
    let mut args = args.into_iter();
    let Some(symbols) = args.next() else {
        return Err(arity_error("def", 1, 0));
    };

    let names = expect_qexpr("def", 0, symbols)?
        .into_iter()
        .map(|symbol| match symbol {
            Value::Symbol(name) => Ok(name),
            other => Err(define_non_symbol(other.type_name())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(define_count_mismatch(names.len(), values.len()));
    }

    for (name, value) in names.iter().zip(&values) {
        tracing::debug!(name = name.as_str(), value = %value, "def");
        env.define(name, value);
    }
    Ok(Value::sexpr())
}
