use super::*;
use pretty_assertions::assert_eq;

fn number(text: &str) -> AstNode {
    AstNode::leaf(tag::NUMBER, text)
}

fn symbol(text: &str) -> AstNode {
    AstNode::leaf(tag::SYMBOL, text)
}

fn delim(c: &str) -> AstNode {
    AstNode::leaf(tag::CHAR, c)
}

fn root(mut exprs: Vec<AstNode>) -> AstNode {
    exprs.insert(0, AstNode::leaf(tag::REGEX, ""));
    exprs.push(AstNode::leaf(tag::REGEX, ""));
    AstNode::branch(tag::ROOT, exprs)
}

#[test]
fn test_empty_program() {
    assert_eq!(parse("").unwrap(), root(vec![]));
    assert_eq!(parse("   ").unwrap(), root(vec![]));
}

#[test]
fn test_flat_program() {
    assert_eq!(
        parse("+ 1 -2").unwrap(),
        root(vec![symbol("+"), number("1"), number("-2")])
    );
}

#[test]
fn test_nested_lists() {
    assert_eq!(
        parse("(head {1 (x)})").unwrap(),
        root(vec![AstNode::branch(
            tag::SEXPR,
            vec![
                delim("("),
                symbol("head"),
                AstNode::branch(
                    tag::QEXPR,
                    vec![
                        delim("{"),
                        number("1"),
                        AstNode::branch(tag::SEXPR, vec![delim("("), symbol("x"), delim(")")]),
                        delim("}"),
                    ],
                ),
                delim(")"),
            ],
        )])
    );
}

#[test]
fn test_empty_lists() {
    assert_eq!(
        parse("() {}").unwrap(),
        root(vec![
            AstNode::branch(tag::SEXPR, vec![delim("("), delim(")")]),
            AstNode::branch(tag::QEXPR, vec![delim("{"), delim("}")]),
        ])
    );
}

#[test]
fn test_out_of_range_number_still_parses() {
    // Range checking belongs to the reader
    assert_eq!(
        parse("99999999999999999999").unwrap(),
        root(vec![number("99999999999999999999")])
    );
}

#[test]
fn test_unclosed_list() {
    let err = parse("(+ 1 {2 3}").unwrap_err();
    assert_eq!(
        err,
        ParseError::Unclosed {
            open: '(',
            position: Position {
                offset: 0,
                line: 1,
                column: 1,
            },
        }
    );
}

#[test]
fn test_mismatched_delimiter() {
    let err = parse("{1 2)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MismatchedDelimiter {
            expected: '}',
            found: ')',
            ..
        }
    ));
    assert_eq!(err.position().offset, 4);
}

#[test]
fn test_stray_closing_delimiter() {
    let err = parse("1 }").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedDelimiter { found: '}', .. }));
}

#[test]
fn test_error_message_format() {
    let err = parse("1\n  )").unwrap_err();
    assert_eq!(
        err.to_string(),
        "<stdin>:2:3: error: unexpected ')', no list is open"
    );
}

#[test]
fn test_display_dump() {
    let dump = parse("{1}").unwrap().to_string();
    assert_eq!(
        dump,
        ">\n  regex\n  expr|qexpr|>\n    char: '{'\n    expr|number|regex: '1'\n    char: '}'\n  regex\n"
    );
}

#[test]
fn test_deep_nesting() {
    let depth = 50_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse(&source).unwrap();

    let mut node = &tree.children[1];
    let mut levels = 0;
    while node.tag == tag::SEXPR {
        levels += 1;
        node = &node.children[1];
    }
    assert_eq!(levels, depth);
    assert_eq!(node, &number("1"));
}

fn deep_qexpr_source(depth: usize) -> String {
    format!("{}x{}", "{".repeat(depth), "}".repeat(depth))
}

#[test]
fn test_deep_tree_clone_and_drop() {
    let tree = parse(&deep_qexpr_source(50_000)).unwrap();
    let copy = tree.clone();
    drop(tree);
    assert_eq!(copy.children.len(), 3);
    assert_eq!(copy.children[1].tag, tag::QEXPR);
}

#[test]
fn test_deep_tree_dump() {
    use std::fmt::Write;

    /// Counts lines without keeping the (quadratically indented) text.
    struct LineCounter(usize);

    impl Write for LineCounter {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0 += s.matches('\n').count();
            Ok(())
        }
    }

    let depth = 8_000;
    let tree = parse(&deep_qexpr_source(depth)).unwrap();
    let mut counter = LineCounter(0);
    write!(counter, "{tree}").unwrap();
    // Root, two anchors, the leaf, and per level one branch plus two delimiters
    assert_eq!(counter.0, 4 + 3 * depth);
}
