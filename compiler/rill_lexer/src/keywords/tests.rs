use pretty_assertions::assert_eq;

use super::*;

#[test]
fn all_keywords_resolve() {
    for word in [
        "final", "coll", "def", "for", "while", "if", "else", "return", "not", "ARRAY",
    ] {
        assert_eq!(lookup(word), Some(TokenKind::Keyword), "{word}");
    }
}

#[test]
fn all_primitive_types_resolve() {
    for word in ["INT", "BOOL", "FLOAT", "STRING"] {
        assert_eq!(lookup(word), Some(TokenKind::Type), "{word}");
    }
}

#[test]
fn boolean_literals_resolve() {
    assert_eq!(lookup("true"), Some(TokenKind::Boolean));
    assert_eq!(lookup("false"), Some(TokenKind::Boolean));
}

#[test]
fn array_is_a_keyword_not_a_type() {
    // Deliberate asymmetry in the language surface.
    assert_eq!(lookup("ARRAY"), Some(TokenKind::Keyword));
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("Final"), None);
    assert_eq!(lookup("int"), None);
    assert_eq!(lookup("True"), None);
    assert_eq!(lookup("array"), None);
    assert_eq!(lookup("IF"), None);
}

#[test]
fn ordinary_identifiers_do_not_resolve() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("foo_bar"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("fo"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("a_very_long_identifier"), None);
}
