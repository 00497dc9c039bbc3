//! Tagged syntax tree.

use std::fmt;

use flisp_stack::ensure_sufficient_stack;

/// Tag strings attached to [`AstNode`]s.
///
/// Tags are `|`-separated rule paths. Consumers classify nodes by substring
/// (`number`, `symbol`, `sexpr`, `qexpr`) or by exact match for the root and
/// the raw lexical leaves.
pub mod tag {
    /// The root of a parsed program.
    pub const ROOT: &str = ">";
    /// Integer literal leaf.
    pub const NUMBER: &str = "expr|number|regex";
    /// Identifier leaf.
    pub const SYMBOL: &str = "expr|symbol|regex";
    /// Parenthesised list.
    pub const SEXPR: &str = "expr|sexpr|>";
    /// Braced list.
    pub const QEXPR: &str = "expr|qexpr|>";
    /// Delimiter leaf (`(`, `)`, `{`, `}`).
    pub const CHAR: &str = "char";
    /// Start/end of input anchors.
    pub const REGEX: &str = "regex";
}

/// A node in the parsed tree.
///
/// Trees may be nested arbitrarily deep: cloning and printing recurse under
/// the stack guard, and dropping walks the tree with an explicit work list.
#[derive(Debug, PartialEq, Eq)]
pub struct AstNode {
    pub tag: String,
    /// Literal text for leaves, empty for branches.
    pub contents: String,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn leaf(tag: &str, contents: impl Into<String>) -> Self {
        AstNode {
            tag: tag.to_string(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create a branch node.
    pub fn branch(tag: &str, children: Vec<AstNode>) -> Self {
        AstNode {
            tag: tag.to_string(),
            contents: String::new(),
            children,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
            if !self.contents.is_empty() {
                write!(f, ": '{}'", self.contents)?;
            }
            writeln!(f)?;
            for child in &self.children {
                child.fmt_indented(f, depth + 1)?;
            }
            Ok(())
        })
    }
}

impl Clone for AstNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| AstNode {
            tag: self.tag.clone(),
            contents: self.contents.clone(),
            children: self.children.clone(),
        })
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Indented dump, one node per line.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
