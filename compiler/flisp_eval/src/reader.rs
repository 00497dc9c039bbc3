//! Tree reader: parse tree to value tree.
//!
//! Nodes are classified by substring of their tag, so the reader accepts any
//! tree that follows the tagging convention of `flisp_parse`, not just trees
//! built by it.

use flisp_parse::{tag, AstNode};
use flisp_stack::ensure_sufficient_stack;
use flisp_value::{invalid_number, Value};

/// Convert a parse tree into a value.
///
/// Number leaves become `Number` (or an `Invalid number!` error), symbol
/// leaves become `Symbol`, and every other node becomes a list: `QExpr` for
/// q-expression tags, `SExpr` for the root, s-expressions and anything else.
pub fn read(node: &AstNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let mut list = if node.tag.contains("qexpr") {
        Value::qexpr()
    } else {
        Value::sexpr()
    };

    ensure_sufficient_stack(|| {
        for child in node.children.iter().filter(|c| !is_punctuation(c)) {
            list.append(read(child));
        }
    });

    list
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| invalid_number().into(), Value::number)
}

/// Delimiters and raw lexical leaves carry no value.
fn is_punctuation(node: &AstNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}") || node.tag == tag::REGEX
}
