//! fLisp Value - runtime values for the fLisp evaluator.
//!
//! This crate provides:
//! - `Value`: the closed set of runtime values (numbers, errors, symbols,
//!   builtin functions, s-expressions and q-expressions)
//! - `Builtin`: the identity of each primitive operation
//! - `EvalError` and its constructors: failures are ordinary values
//! - `print`: the textual rendering of any value
//!
//! # Ownership
//!
//! A list value owns its children exclusively. `Clone` is a full deep copy
//! and is only used where the language semantics copy (environment bind and
//! lookup); everything else moves.

mod builtin;
mod errors;
mod value;

pub use builtin::Builtin;
pub use errors::{
    define_count_mismatch, define_non_symbol, division_by_zero, empty_list, incorrect_type,
    integer_overflow, invalid_number, not_a_function, too_few_arguments, too_many_arguments,
    unbound_symbol, EvalError, EvalErrorKind,
};
pub use value::{print, Cells, Value};
