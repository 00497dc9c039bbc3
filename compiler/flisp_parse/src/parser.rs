//! Recursive-descent parser from tokens to the tagged tree.

use flisp_stack::ensure_sufficient_stack;

use crate::ast::{tag, AstNode};
use crate::error::{ParseError, Position};
use crate::lexer::{tokenize, Spanned, TokenKind};

/// Parse a complete program.
///
/// The root holds every top-level expression between the start and end
/// anchors. Empty input parses to a root with only the anchors.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(source, tokens).parse_program()
}

struct Parser<'src> {
    source: &'src str,
    tokens: std::vec::IntoIter<Spanned<TokenKind>>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Spanned<TokenKind>>) -> Self {
        Parser {
            source,
            tokens: tokens.into_iter(),
        }
    }

    fn position(&self, offset: usize) -> Position {
        Position::from_offset(self.source, offset)
    }

    fn unexpected_delimiter(&self, found: char, offset: usize) -> ParseError {
        ParseError::UnexpectedDelimiter {
            found,
            position: self.position(offset),
        }
    }

    fn parse_program(mut self) -> Result<AstNode, ParseError> {
        let mut children = vec![AstNode::leaf(tag::REGEX, "")];

        while let Some(token) = self.tokens.next() {
            children.push(self.parse_expr(token)?);
        }

        children.push(AstNode::leaf(tag::REGEX, ""));
        Ok(AstNode::branch(tag::ROOT, children))
    }

    /// Parse the expression starting at `token`. A closing delimiter here has
    /// no matching open list.
    fn parse_expr(&mut self, token: Spanned<TokenKind>) -> Result<AstNode, ParseError> {
        let source = self.source;
        let text = &source[token.span.clone()];
        match token.value {
            TokenKind::Number => Ok(AstNode::leaf(tag::NUMBER, text)),
            TokenKind::Symbol => Ok(AstNode::leaf(tag::SYMBOL, text)),
            TokenKind::LParen => self.parse_list(tag::SEXPR, '(', ')', token.span.start),
            TokenKind::LBrace => self.parse_list(tag::QEXPR, '{', '}', token.span.start),
            TokenKind::RParen => Err(self.unexpected_delimiter(')', token.span.start)),
            TokenKind::RBrace => Err(self.unexpected_delimiter('}', token.span.start)),
        }
    }

    fn parse_list(
        &mut self,
        list_tag: &str,
        open: char,
        close: char,
        open_offset: usize,
    ) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| {
            let mut children = vec![AstNode::leaf(tag::CHAR, open.to_string())];

            loop {
                let Some(token) = self.tokens.next() else {
                    return Err(ParseError::Unclosed {
                        open,
                        position: self.position(open_offset),
                    });
                };

                match token.value.delimiter() {
                    Some(found) if token.value.is_close() => {
                        if found != close {
                            return Err(ParseError::MismatchedDelimiter {
                                expected: close,
                                found,
                                position: self.position(token.span.start),
                            });
                        }
                        children.push(AstNode::leaf(tag::CHAR, close.to_string()));
                        return Ok(AstNode::branch(list_tag, children));
                    }
                    _ => children.push(self.parse_expr(token)?),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests;
