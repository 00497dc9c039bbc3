use super::*;

#[test]
fn test_buffer_println_captures_with_newline() {
    let handler = BufferOutput::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
}

#[test]
fn test_buffer_print_captures_without_newline() {
    let handler = BufferOutput::default();
    handler.print("fLisp> ");
    handler.println("3");
    assert_eq!(handler.get_output(), "fLisp> 3\n");
}

#[test]
fn test_output_enum_dispatches_to_buffer() {
    let output = buffer_output();
    assert!(output.print("a").is_ok());
    assert!(output.println("b").is_ok());
    assert_eq!(output.get_output(), "ab\n");
}

#[test]
fn test_stdout_output_captures_nothing() {
    assert_eq!(stdout_output().get_output(), "");
}
