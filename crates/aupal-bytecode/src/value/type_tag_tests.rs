use std::collections::HashSet;

use super::*;

#[test]
fn codes_are_injective() {
    let codes: HashSet<char> = TypeTag::ALL.iter().map(|t| t.code()).collect();
    assert_eq!(codes.len(), TypeTag::ALL.len());
}

#[test]
fn code_roundtrip() {
    for tag in TypeTag::ALL {
        assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
        assert_eq!(TypeTag::from_byte(tag.code() as u8), Some(tag));
    }
    assert_eq!(TypeTag::from_code('z'), None);
    assert_eq!(TypeTag::from_byte(0), None);
}

#[test]
fn runtime_codes() {
    let codes: String = TypeTag::ALL.iter().map(|t| t.code()).collect();
    assert_eq!(codes, "yqutYinxbdDs");
}

#[test]
fn widths() {
    assert_eq!(TypeTag::U8.width(), Some(1));
    assert_eq!(TypeTag::I16.width(), Some(2));
    assert_eq!(TypeTag::FixPoint.width(), Some(2));
    assert_eq!(TypeTag::U32.width(), Some(4));
    assert_eq!(TypeTag::Double.width(), Some(8));
    assert_eq!(TypeTag::Bool.width(), Some(1));
    assert_eq!(TypeTag::String.width(), None);
}

#[test]
fn default_integer_is_int16() {
    assert_eq!(TypeTag::DEFAULT_INTEGER.code(), 'i');
    assert_eq!(TypeTag::DEFAULT_INTEGER.width(), Some(2));
}

#[test]
fn encoded_width_matches_tag() {
    let samples = [
        (TypeTag::U8, "1"),
        (TypeTag::U16, "1"),
        (TypeTag::U32, "1"),
        (TypeTag::U64, "1"),
        (TypeTag::I8, "-1"),
        (TypeTag::I16, "-1"),
        (TypeTag::I32, "-1"),
        (TypeTag::I64, "-1"),
        (TypeTag::Bool, "True"),
        (TypeTag::Double, "1.25"),
        (TypeTag::FixPoint, "1.25"),
    ];
    for (tag, literal) in samples {
        let encoded = tag.encode(literal).unwrap();
        assert_eq!(Some(encoded.bytes.len()), tag.width(), "{tag}");
        assert_eq!(encoded.tag, tag);
    }
}
