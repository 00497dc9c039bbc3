//! fLisp Parse - source text to tagged syntax tree.
//!
//! The evaluator never looks at source text. It consumes a generic tree of
//! [`AstNode`]s, each carrying a classifying `tag`, the literal `contents` of
//! leaves, and ordered `children`. This crate produces that tree:
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>%^!&]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```
//!
//! # Tree Shape
//!
//! `+ 1 {2}` parses to:
//!
//! ```text
//! >
//!   regex
//!   expr|symbol|regex: '+'
//!   expr|number|regex: '1'
//!   expr|qexpr|>
//!     char: '{'
//!     expr|number|regex: '2'
//!     char: '}'
//!   regex
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::{tag, AstNode};
pub use error::{ParseError, Position};
pub use lexer::{tokenize, Spanned, TokenKind};
pub use parser::parse;
