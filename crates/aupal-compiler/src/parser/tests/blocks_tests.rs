use indoc::indoc;

use crate::ParseErrorKind;
use crate::parser::MAX_ASSIGNMENTS;
use crate::test_utils::{describe, expect_bytes, expect_error, expect_records};

#[test]
fn set_values_block() {
    let src = indoc! {"
        S volume
            gain = 5
            mute = False
    "};
    assert_eq!(expect_bytes(src), b"Svolume\0\x02gain\0i\x05\x00mute\0b\x00");
}

#[test]
fn update_values_block() {
    let src = indoc! {"
        U mixer
          pan = D(-2.5)
    "};
    assert_eq!(expect_bytes(src), b"Umixer\0\x01pan\0D\x28\x20");
}

#[test]
fn block_followed_by_command_yields_two_records_in_order() {
    let src = indoc! {"
        S volume
          gain = 5
        i amp
    "};
    let records = expect_records(src);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, 1);
    assert_eq!(records[0].bytes, b"Svolume\0\x01gain\0i\x05\x00");
    assert_eq!(records[1].line, 3);
    assert_eq!(records[1].bytes, b"iamp\0");
}

#[test]
fn consecutive_blocks() {
    let src = indoc! {"
        S a
          x = 1
        S b
            y = 2
            z = 3
    "};
    insta::assert_snapshot!(describe(src), @r#"
    1: S (set all values for element "a")
    3: S (set all values for element "b")
    "#);
}

#[test]
fn block_closed_by_end_of_input_without_body() {
    assert_eq!(expect_bytes("S volume"), b"Svolume\0\x00");
    assert_eq!(expect_bytes("U volume\n\n# nothing\n"), b"Uvolume\0\x00");
}

#[test]
fn blank_and_comment_lines_inside_block() {
    let src = indoc! {"
        S volume
          gain = 5

          # muted for now
          mute = True
    "};
    assert_eq!(expect_bytes(src), b"Svolume\0\x02gain\0i\x05\x00mute\0b\x01");
}

#[test]
fn indentation_width_is_fixed_by_first_body_line() {
    let src = indoc! {"
        S volume
           gain = 5
           mute = False
    "};
    assert_eq!(expect_records(src)[0].bytes[8], 2);
}

#[test]
fn indentation_expected() {
    let err = expect_error("S volume\ngain = 5\n");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ParseErrorKind::IndentationExpected);
}

#[test]
fn not_enough_indentation() {
    let src = indoc! {"
        S volume
            gain = 5
          mute = False
    "};
    insta::assert_snapshot!(expect_error(src), @"line 3: not enough indentation");
}

#[test]
fn too_much_indentation() {
    let src = indoc! {"
        S volume
          gain = 5
            mute = False
    "};
    insta::assert_snapshot!(expect_error(src), @"line 3: too much indentation");
}

#[test]
fn indented_top_level_command() {
    insta::assert_snapshot!(expect_error("i a\n  i b\n"), @"line 2: too much indentation");
}

#[test]
fn reprocessed_line_keeps_its_number() {
    let src = indoc! {"
        S volume
          gain = 5
        X
    "};
    insta::assert_snapshot!(expect_error(src), @"line 3: unknown command 'X'");
}

#[test]
fn invalid_body_line() {
    let src = indoc! {"
        S volume
          gain = 5
          5 = gain
    "};
    insta::assert_snapshot!(
        expect_error(src),
        @r#"line 3: identifier expected on left-hand side of assignment, found "5""#
    );
}

#[test]
fn block_holds_at_most_255_assignments() {
    let body: String = (0..MAX_ASSIGNMENTS).map(|i| format!("  v{i} = 1\n")).collect();
    let bytes = expect_bytes(&format!("S big\n{body}"));
    assert_eq!(bytes[5], 255);

    let err = expect_error(&format!("S big\n{body}  overflow = 1\n"));
    assert_eq!(err.line, MAX_ASSIGNMENTS + 2);
    insta::assert_snapshot!(err.kind, @r#"too many assignments for element "big" (at most 255)"#);
}
