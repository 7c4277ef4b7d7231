use indoc::indoc;

use super::*;

#[test]
fn dump_plain() {
    let bytes = b"I\0\0\0Idev0\0amp\0Svolume\0\x02gain\0i\x05\x00mute\0b\x00\
uvolume\0label\0sloud\0dvolume\0gain\0Cout\0in\0c\0\0iamp\0";
    insta::assert_snapshot!(dump(bytes, Colors::OFF).unwrap(), @r#"
    0000  I  clear all instances
    0004  I  "dev0" "amp"
    000e  S  "volume"  (2 values)
            gain = i(5)
            mute = False
    0026  u  "volume"  label = "loud"
    003a  d  "volume" "gain"
    0047  C  "out" "in"
    004f  c  * *
    0052  i  "amp"
    "#);
}

#[test]
fn dump_single_value_block() {
    let bytes = b"Umixer\0\x01pan\0D\x28\x20";
    assert_eq!(
        dump(bytes, Colors::OFF).unwrap(),
        indoc! {r#"
            0000  U  "mixer"  (1 value)
                    pan = D(-2.5)
        "#}
    );
}

#[test]
fn dump_quotes_strings_containing_double_quotes() {
    let bytes = b"uel\0title\0sa \"b\"\0";
    assert_eq!(
        dump(bytes, Colors::OFF).unwrap(),
        "0000  u  \"el\"  title = 'a \"b\"'\n"
    );
}

#[test]
fn dump_colored() {
    let out = dump(b"iamp\0", Colors::ON).unwrap();
    assert_eq!(
        out,
        "\x1b[2m0000\x1b[0m  \x1b[34mi\x1b[0m  \x1b[32m\"amp\"\x1b[0m\n"
    );
}

#[test]
fn dump_reports_decode_errors() {
    let err = dump(b"iamp\0S", Colors::OFF).unwrap_err();
    assert_eq!(err, DecodeError::UnterminatedString { offset: 6 });
}
