use crate::parser::{ParseError, ParseErrorKind};
use crate::test_utils::expect_error;

#[test]
fn plain_render_shows_location_and_cause() {
    let err = expect_error("i amp\n\nX foo\n");
    let out = err.render("X foo", Some("mix.aupal"), false);

    assert!(out.starts_with("error: unknown command 'X'"), "{out}");
    assert!(out.contains("mix.aupal:3:1"), "{out}");
    assert!(out.contains("3 | X foo"), "{out}");
    assert!(out.contains("^^^^^"), "{out}");
}

#[test]
fn indented_lines_are_annotated_from_first_character() {
    let err = ParseError::new(4, ParseErrorKind::TooMuchIndentation);
    let out = err.render("    b = 2", None, false);

    assert!(out.contains("4 |"), "{out}");
    assert!(out.contains("b = 2"), "{out}");
    assert!(out.contains("too much indentation"), "{out}");
}

#[test]
fn styled_render_uses_ansi_escapes() {
    let err = ParseError::new(1, ParseErrorKind::AssignmentExpected);
    assert!(err.render("u x y", None, true).contains("\x1b["));
}
