//! fLisp Eval - the evaluation core of fLisp.
//!
//! # Architecture
//!
//! - `read`: parse tree (`flisp_parse::AstNode`) to `Value`
//! - `Environment`: flat name to value table, populated with builtins
//! - `eval`: reduces a `Value` against an `Environment`
//! - builtins: the fixed primitive library, dispatched by `Builtin`
//!
//! ```text
//! let mut env = Environment::new();
//! env.register_default_builtins();
//! let tree = flisp_parse::parse("+ 1 (* 2 3)")?;
//! let result = eval(&mut env, read(&tree));
//! assert_eq!(print(&result), "7");
//! ```
//!
//! # Re-exports
//!
//! Value types from `flisp_value` are re-exported so the read loop only needs
//! this crate and the parser.

mod builtins;
mod environment;
mod eval;
mod reader;

pub use flisp_value::{print, Builtin, EvalError, EvalErrorKind, Value};

pub use environment::Environment;
pub use eval::eval;
pub use reader::read;

#[cfg(test)]
mod tests;
