//! Test helpers.

use crate::{LineParser, ParseError, Record, Reprocess, translate};

/// Compile `src`, panicking on a parse error.
pub fn expect_bytes(src: &str) -> Vec<u8> {
    translate(src).unwrap_or_else(|e| panic!("expected source to compile, got: {e}\n{src}"))
}

/// Compile `src`, panicking if it compiles.
pub fn expect_error(src: &str) -> ParseError {
    match translate(src) {
        Ok(bytes) => panic!("expected a parse error, got {bytes:?}\n{src}"),
        Err(e) => e,
    }
}

/// Parse `src` and collect the sealed records in commit order.
pub fn expect_records(src: &str) -> Vec<Record> {
    let mut parser = LineParser::new();
    let mut records = Vec::new();
    for line in src.lines() {
        loop {
            let again = parser
                .parse(line)
                .unwrap_or_else(|e| panic!("expected source to parse, got: {e}\n{src}"));
            take_sealed(&mut parser, &mut records);
            if again == Reprocess::No {
                break;
            }
        }
    }
    parser.close();
    take_sealed(&mut parser, &mut records);
    records
}

/// One `line: description` row per record.
pub fn describe(src: &str) -> String {
    expect_records(src)
        .iter()
        .map(|r| format!("{}: {}\n", r.line, r.description))
        .collect()
}

fn take_sealed(parser: &mut LineParser, records: &mut Vec<Record>) {
    if parser.emission().is_sealed() {
        records.push(parser.emission_mut().take());
    }
}
