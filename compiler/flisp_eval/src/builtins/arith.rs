//! Arithmetic builtins: `+ - * / % ^ min max`.
//!
//! Every operator folds left to right from its first argument. Integers are
//! 64-bit and never wrap: overflow is an error value, like division by zero.

use flisp_value::{division_by_zero, integer_overflow, EvalError, Value};

use super::args::{arity_error, expect_number};
use super::BuiltinResult;

/// A numeric fold operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NumOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Max,
    Min,
}

impl NumOp {
    fn name(self) -> &'static str {
        match self {
            NumOp::Add => "+",
            NumOp::Sub => "-",
            NumOp::Mul => "*",
            NumOp::Div => "/",
            NumOp::Mod => "%",
            NumOp::Pow => "^",
            NumOp::Max => "max",
            NumOp::Min => "min",
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            NumOp::Add => lhs.checked_add(rhs).ok_or_else(integer_overflow),
            NumOp::Sub => lhs.checked_sub(rhs).ok_or_else(integer_overflow),
            NumOp::Mul => lhs.checked_mul(rhs).ok_or_else(integer_overflow),
            NumOp::Div | NumOp::Mod if rhs == 0 => Err(division_by_zero()),
            // Truncating, like `%`: `(/ -7 2)` is -3 and `(% -7 2)` is -1
            NumOp::Div => lhs.checked_div(rhs).ok_or_else(integer_overflow),
            NumOp::Mod => lhs.checked_rem(rhs).ok_or_else(integer_overflow),
            NumOp::Pow => power(lhs, rhs),
            NumOp::Max => Ok(lhs.max(rhs)),
            NumOp::Min => Ok(lhs.min(rhs)),
        }
    }
}

/// Fold `op` over `args`. A lone argument to `-` is negated.
pub(super) fn fold(op: NumOp, args: Vec<Value>) -> BuiltinResult {
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| expect_number(op.name(), index, arg))
        .collect::<Result<Vec<_>, _>>()?;

    let mut numbers = numbers.into_iter();
    let Some(mut acc) = numbers.next() else {
        return Err(arity_error(op.name(), 1, 0));
    };

    if op == NumOp::Sub && numbers.as_slice().is_empty() {
        return acc.checked_neg().map(Value::number).ok_or_else(integer_overflow);
    }

    for rhs in numbers {
        acc = op.apply(acc, rhs)?;
    }
    Ok(Value::number(acc))
}

/// Integer exponentiation.
///
/// A negative exponent gives the real-valued power truncated toward zero,
/// which is only non-zero for bases of magnitude one.
fn power(base: i64, exp: i64) -> Result<i64, EvalError> {
    match base {
        1 => return Ok(1),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        0 if exp < 0 => return Err(division_by_zero()),
        _ if exp < 0 => return Ok(0),
        _ => {}
    }
    let exp = u32::try_from(exp).map_err(|_| integer_overflow())?;
    base.checked_pow(exp).ok_or_else(integer_overflow)
}
