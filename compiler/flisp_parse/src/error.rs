//! Parse errors.

use std::fmt;

/// Location in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Byte offset.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

impl Position {
    /// Compute line and column for a byte offset into `source`.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<stdin>:{}:{}", self.line, self.column)
    }
}

/// Error produced when source text does not match the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{position}: error: unexpected character '{found}'")]
    UnexpectedChar { found: String, position: Position },

    #[error("{position}: error: unexpected '{found}', no list is open")]
    UnexpectedDelimiter { found: char, position: Position },

    #[error("{position}: error: expected '{expected}' but found '{found}'")]
    MismatchedDelimiter {
        expected: char,
        found: char,
        position: Position,
    },

    #[error("{position}: error: '{open}' is never closed")]
    Unclosed { open: char, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedChar { position, .. }
            | ParseError::UnexpectedDelimiter { position, .. }
            | ParseError::MismatchedDelimiter { position, .. }
            | ParseError::Unclosed { position, .. } => *position,
        }
    }
}
