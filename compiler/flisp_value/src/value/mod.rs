//! Runtime values for the fLisp evaluator.
//!
//! `Value` is a closed enum: every consumer matches all six variants. List
//! values (`SExpr`, `QExpr`) own their children in [`Cells`], so a value is
//! released exactly once when its owner drops it, and `Clone` is a deep copy.
//!
//! ```text
//! let mut list = Value::qexpr();
//! list.append(Value::number(1));
//! list.append(Value::number(2));
//! let first = list.pop_at(0);     // list is now {2}
//! ```

mod cells;
mod print;

pub use cells::Cells;
pub use print::print;

use crate::builtin::Builtin;
use crate::errors::EvalError;

/// Runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// A failure; propagates without further evaluation.
    Error(EvalError),
    /// An identifier, resolved against the environment when evaluated.
    Symbol(String),
    /// A builtin operation. Copies share the identity of the builtin.
    Function(Builtin),
    /// An application form, reduced when evaluated.
    SExpr(Cells),
    /// A quoted list, never evaluated automatically.
    QExpr(Cells),
}

impl Value {
    // Factory methods

    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Empty s-expression, `()`.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(Cells::new())
    }

    /// Empty q-expression, `{}`.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(Cells::new())
    }

    #[inline]
    pub fn sexpr_from(cells: Vec<Value>) -> Self {
        Value::SExpr(cells.into())
    }

    #[inline]
    pub fn qexpr_from(cells: Vec<Value>) -> Self {
        Value::QExpr(cells.into())
    }

    // Inspection

    /// Name of the value's kind, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_qexpr(&self) -> bool {
        matches!(self, Value::QExpr(_))
    }

    // List operations
    //
    // These are only meaningful on `SExpr`/`QExpr`. Calling them on any
    // other variant, or with an index past the end, is a bug in the caller.

    /// Append `value` to the end of this list, taking ownership of it.
    pub fn append(&mut self, value: Value) {
        self.cells_mut("append").push(value);
    }

    /// Remove and return the child at `index`, shifting later children left.
    pub fn pop_at(&mut self, index: usize) -> Value {
        self.cells_mut("pop_at").remove(index)
    }

    /// Remove the child at `index` and drop the rest of the list.
    pub fn take_at(mut self, index: usize) -> Value {
        self.pop_at(index)
    }

    /// Retag a q-expression as an s-expression; other values are unchanged.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }

    /// Retag an s-expression as a q-expression; other values are unchanged.
    pub fn into_qexpr(self) -> Value {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    fn cells_mut(&mut self, operation: &str) -> &mut Cells {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("{operation} called on {}", other.type_name()),
        }
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }
}
