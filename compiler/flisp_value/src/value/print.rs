//! Textual rendering of values.

use std::fmt;

use flisp_stack::ensure_sufficient_stack;

use super::Value;

/// Render a value the way the read loop shows it.
pub fn print(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(_) => f.write_str("<function>"),
            Value::SExpr(cells) => fmt_list(f, cells, '(', ')'),
            Value::QExpr(cells) => fmt_list(f, cells, '{', '}'),
        }
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    ensure_sufficient_stack(|| {
        write!(f, "{open}")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "{close}")
    })
}
