//! Error values for evaluation.
//!
//! Failures in fLisp are values, not control flow: a builtin that rejects
//! its arguments returns an `Error` value and the evaluator propagates it
//! like any other result.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` records what went wrong; the message printed to the user
//! is rendered from it once, at construction. Factory functions (e.g.
//! `division_by_zero()`) are the public API.

use std::fmt;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Reader
    InvalidNumber,

    // Environment
    UnboundSymbol {
        name: String,
    },

    // Application
    NotAFunction,

    // Arithmetic
    DivisionByZero,
    IntegerOverflow,

    // Builtin preconditions
    TooManyArguments {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    TooFewArguments {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    IncorrectType {
        function: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
    EmptyList {
        function: &'static str,
    },
    DefineNonSymbol {
        got: &'static str,
    },
    DefineCountMismatch {
        symbols: usize,
        values: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "Invalid number!"),
            Self::UnboundSymbol { name } => write!(f, "Unbound Symbol '{name}'!"),
            Self::NotAFunction => write!(f, "first element is not a function!"),
            Self::DivisionByZero => write!(f, "Division by zero!"),
            Self::IntegerOverflow => write!(f, "Integer overflow!"),
            Self::TooManyArguments {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed too many arguments! Got {got}, Expected {expected}."
            ),
            Self::TooFewArguments {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed too few arguments! Got {got}, Expected {expected}."
            ),
            Self::IncorrectType {
                function,
                index,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect type for argument {index}! \
                 Got {got}, Expected {expected}."
            ),
            Self::EmptyList { function } => write!(f, "Function '{function}' passed {{}}!"),
            Self::DefineNonSymbol { got } => write!(
                f,
                "Function 'def' cannot define non-symbol! Got {got}, Expected Symbol."
            ),
            Self::DefineCountMismatch { symbols, values } => write!(
                f,
                "Function 'def' cannot define incorrect number of values to symbols! \
                 Got {values}, Expected {symbols}."
            ),
        }
    }
}

/// Payload of an `Error` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, rendered from `kind`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Reader Errors

/// Numeric literal that is malformed or does not fit in an `i64`.
#[cold]
pub fn invalid_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber)
}

// Environment Errors

/// Lookup of a name with no binding.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Application Errors

/// The head of an s-expression did not evaluate to a function.
#[cold]
pub fn not_a_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction)
}

// Arithmetic Errors

/// Division or remainder by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Result does not fit in an `i64`.
#[cold]
pub fn integer_overflow() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow)
}

// Builtin Precondition Errors

#[cold]
pub fn too_many_arguments(function: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments {
        function,
        expected,
        got,
    })
}

#[cold]
pub fn too_few_arguments(function: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooFewArguments {
        function,
        expected,
        got,
    })
}

/// Argument `index` has the wrong kind of value.
#[cold]
pub fn incorrect_type(
    function: &'static str,
    index: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncorrectType {
        function,
        index,
        expected,
        got,
    })
}

/// A list function was given `{}`.
#[cold]
pub fn empty_list(function: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList { function })
}

#[cold]
pub fn define_non_symbol(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineNonSymbol { got })
}

#[cold]
pub fn define_count_mismatch(symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineCountMismatch { symbols, values })
}
