//! The builtin library.
//!
//! Every builtin takes ownership of its already-evaluated arguments and
//! returns a fresh value. Precondition failures come back as `Error`
//! values naming the function; nothing here panics on user input.

mod args;
mod arith;
mod list;
mod variables;

use flisp_value::{Builtin, EvalError, Value};

use crate::environment::Environment;

use arith::NumOp;

/// Result of a builtin before it is folded into a value.
type BuiltinResult = Result<Value, EvalError>;

/// Apply `builtin` to `args`.
pub(crate) fn apply(builtin: Builtin, env: &mut Environment, args: Vec<Value>) -> Value {
    tracing::trace!(builtin = builtin.name(), argc = args.len(), "apply");

    let result = match builtin {
        Builtin::Head => list::head(args),
        Builtin::Tail => list::tail(args),
        Builtin::List => Ok(list::list(args)),
        Builtin::Init => list::init(args),
        Builtin::Eval => list::eval(env, args),
        Builtin::Join => list::join(args),
        Builtin::Cons => list::cons(args),
        Builtin::Len => list::len(args),
        Builtin::Last => list::last(args),
        Builtin::Def => variables::def(env, args),
        Builtin::Add => arith::fold(NumOp::Add, args),
        Builtin::Sub => arith::fold(NumOp::Sub, args),
        Builtin::Mul => arith::fold(NumOp::Mul, args),
        Builtin::Div => arith::fold(NumOp::Div, args),
        Builtin::Mod => arith::fold(NumOp::Mod, args),
        Builtin::Pow => arith::fold(NumOp::Pow, args),
        Builtin::Max => arith::fold(NumOp::Max, args),
        Builtin::Min => arith::fold(NumOp::Min, args),
    };

    result.unwrap_or_else(Value::from)
}
