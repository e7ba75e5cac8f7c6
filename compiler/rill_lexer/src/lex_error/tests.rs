use std::io;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn factory_methods_carry_position_and_kind() {
    let err = LexError::unterminated_string(7);
    assert_eq!(err.pos, 7);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);

    let err = LexError::unknown_escape(3, 'q');
    assert_eq!(err.pos, 3);
    assert_eq!(err.kind, LexErrorKind::UnknownEscape { escape: 'q' });

    let err = LexError::unrecognized_char(10, '@');
    assert_eq!(err.pos, 10);
    assert_eq!(err.kind, LexErrorKind::UnrecognizedChar { ch: '@' });
}

#[test]
fn display_includes_offset_and_message() {
    let err = LexError::unterminated_string(12);
    assert_eq!(
        err.to_string(),
        "lexical error at byte 12: unterminated string literal"
    );

    let err = LexError::unknown_escape(0, 'q');
    assert_eq!(
        err.to_string(),
        "lexical error at byte 0: unknown escape sequence: \\q"
    );

    let err = LexError::incomplete_not_equal(4);
    assert_eq!(
        err.to_string(),
        "lexical error at byte 4: malformed operator: expected `=` to complete `=/=`"
    );
}

#[test]
fn operator_error_messages_suggest_the_double_form() {
    assert!(LexError::lone_ampersand(0).to_string().contains("use `&&`"));
    assert!(LexError::lone_pipe(0).to_string().contains("use `||`"));
}

#[test]
fn unrecognized_char_message_quotes_the_char() {
    let err = LexError::unrecognized_char(10, '@');
    assert_eq!(
        err.to_string(),
        "lexical error at byte 10: unrecognized character: '@'"
    );
}

#[test]
fn io_errors_are_wrapped_not_swallowed() {
    let inner = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let err = LexError::io(&inner);
    assert_eq!(err.pos, 0);
    assert_eq!(
        err.kind,
        LexErrorKind::Io {
            message: String::from("pipe closed"),
        }
    );
    assert!(err.to_string().contains("I/O error reading source"));
}

#[test]
fn error_equality() {
    let a = LexError::unterminated_escape(5);
    let b = LexError::unterminated_escape(5);
    let c = LexError::unterminated_escape(6);
    let d = LexError::unterminated_string(5);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn all_factory_methods_construct() {
    let _ = LexError::unterminated_string(0);
    let _ = LexError::unterminated_escape(0);
    let _ = LexError::unknown_escape(0, 'q');
    let _ = LexError::incomplete_not_equal(0);
    let _ = LexError::lone_ampersand(0);
    let _ = LexError::lone_pipe(0);
    let _ = LexError::unrecognized_char(0, '~');
    let _ = LexError::unexpected_eof_in_number(0);
    let _ = LexError::io(&io::Error::other("boom"));
}
