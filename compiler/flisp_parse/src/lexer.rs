//! Tokenizer for fLisp using logos.

use std::ops::Range;

use logos::Logos;

use crate::error::{ParseError, Position};

/// Token kinds.
///
/// Numbers and symbols overlap (`42` matches both regexes); the higher
/// priority makes such tokens numbers. Longer matches still win, so `1+`
/// is a symbol.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+", priority = 10)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>%^!&]+")]
    Symbol,
}

impl TokenKind {
    /// The delimiter character for bracket tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }

    #[inline]
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

/// Split `source` into tokens, skipping whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<TokenKind>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Spanned {
                value: kind,
                span: lexer.span(),
            }),
            Err(()) => {
                let span = lexer.span();
                return Err(ParseError::UnexpectedChar {
                    found: lexer.slice().to_string(),
                    position: Position::from_offset(source, span.start),
                });
            }
        }
    }

    Ok(tokens)
}
