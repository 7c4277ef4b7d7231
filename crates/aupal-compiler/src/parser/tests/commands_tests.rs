use indoc::indoc;

use crate::test_utils::{describe, expect_bytes, expect_error};
use crate::{LineParser, Translator};

#[test]
fn clear_all_instances() {
    assert_eq!(expect_bytes("I"), b"I\0\0\0");
    assert_eq!(expect_bytes("I   "), b"I\0\0\0");
}

#[test]
fn add_instance() {
    assert_eq!(expect_bytes("I dev0 amp"), b"Idev0\0amp\0");
    assert_eq!(expect_bytes("I\tdev0    amp"), b"Idev0\0amp\0");
}

#[test]
fn add_instance_needs_zero_or_two_arguments() {
    insta::assert_snapshot!(
        expect_error("I dev0"),
        @"line 1: found 1 arguments for command I, expecting either 0 or 2"
    );
    insta::assert_snapshot!(
        expect_error("I a b c"),
        @"line 1: found 3 arguments for command I, expecting either 0 or 2"
    );
}

#[test]
fn remove_instance() {
    assert_eq!(expect_bytes("i amp"), b"iamp\0");
    insta::assert_snapshot!(expect_error("i"), @"line 1: found 0 arguments for command i, expecting 1");
    insta::assert_snapshot!(expect_error("i a b"), @"line 1: found 2 arguments for command i, expecting 1");
}

#[test]
fn arguments_may_follow_the_letter_directly() {
    assert_eq!(expect_bytes("iamp"), b"iamp\0");
}

#[test]
fn set_and_update_values_need_one_argument() {
    insta::assert_snapshot!(expect_error("S"), @"line 1: found 0 arguments for command S, expecting 1");
    insta::assert_snapshot!(expect_error("U a b"), @"line 1: found 2 arguments for command U, expecting 1");
}

#[test]
fn bad_block_header_after_a_block_keeps_only_the_block() {
    let src = indoc! {"
        S volume
          gain = 5
          mute = False
        S a b
    "};
    let mut translator = Translator::new(Vec::<u8>::new());
    let err = translator.execute(src.as_bytes()).unwrap_err();

    insta::assert_snapshot!(err, @"line 4: found 2 arguments for command S, expecting 1");
    assert_eq!(
        translator.into_output(),
        b"Svolume\0\x02gain\0i\x05\x00mute\0b\x00"
    );
}

#[test]
fn update_single_value() {
    assert_eq!(expect_bytes("u mixer gain = 5"), b"umixer\0gain\0i\x05\x00");
    assert_eq!(expect_bytes("u mixer   level=D(1.5)"), b"umixer\0level\0D\x18\x00");
    assert_eq!(expect_bytes("u el name = \"x\""), b"uel\0name\0sx\0");
}

#[test]
fn update_single_value_needs_assignment() {
    insta::assert_snapshot!(expect_error("u mixer"), @"line 1: found 1 arguments for command u, expecting 2");
    insta::assert_snapshot!(expect_error("u"), @"line 1: found 0 arguments for command u, expecting 2");
    insta::assert_snapshot!(expect_error("u mixer gain"), @"line 1: assignment expected");
}

#[test]
fn delete_value() {
    assert_eq!(expect_bytes("d mixer gain"), b"dmixer\0gain\0");
    insta::assert_snapshot!(expect_error("d mixer"), @"line 1: found 1 arguments for command d, expecting 2");
}

#[test]
fn connect() {
    assert_eq!(expect_bytes("C out in"), b"Cout\0in\0");
    insta::assert_snapshot!(expect_error("C out in x"), @"line 1: found 3 arguments for command C, expecting 2");
}

#[test]
fn disconnect_endpoints() {
    assert_eq!(expect_bytes("c"), b"c\0\0");
    assert_eq!(expect_bytes("c out"), b"cout\0\0");
    assert_eq!(expect_bytes("c \"\" in"), b"c\0in\0");
    assert_eq!(expect_bytes("c 'out' \"in\""), b"cout\0in\0");
    insta::assert_snapshot!(expect_error("c a b c"), @"line 1: found 3 arguments for command c, expecting at most 2");
}

#[test]
fn unknown_command() {
    insta::assert_snapshot!(expect_error("X foo"), @"line 1: unknown command 'X'");
}

#[test]
fn non_ascii_operand() {
    insta::assert_snapshot!(
        expect_error("i caf\u{e9}"),
        @r#"line 1: invalid string "café" (only ASCII without NUL is allowed)"#
    );
}

#[test]
fn descriptions() {
    let src = indoc! {r#"
        I
        I dev0 amp
        i amp
        S volume
          gain = 5
        U volume
          gain = 6
        u volume mute = True
        d volume gain
        C out in
        c
        c out
        c "" in
        c out in
    "#};
    insta::assert_snapshot!(describe(src), @r#"
    1: I (clear all)
    2: I (instance ID "dev0", name "amp")
    3: i (instance "amp" removed)
    4: S (set all values for element "volume")
    6: U (update some values for element "volume")
    8: u (update control "mute" for element "volume")
    9: d (delete value "gain" for element "volume")
    10: C (make audio connection from "out" to "in")
    11: c (remove all audio connections)
    12: c (remove audio connections from "out")
    13: c (remove audio connections to "in")
    14: c (remove audio connections from "out" to "in")
    "#);
}

#[test]
fn comments_and_blank_lines_produce_nothing() {
    let src = indoc! {"
        # header

           # indented comment
        i amp
    "};
    assert_eq!(expect_bytes(src), b"iamp\0");
}

#[test]
fn error_reports_the_failing_line() {
    let src = indoc! {"
        i amp

        C out
    "};
    assert_eq!(expect_error(src).line, 3);
}

#[test]
#[should_panic(expected = "command line is not blank")]
fn blank_command_line_is_a_contract_violation() {
    let _ = LineParser::new().command("");
}
