use std::path::PathBuf;

use aupal_bytecode::{Colors, Decoded, Instructions, dump};
use serde::Serialize;

use super::input::load_binary;
use super::{CliError, fail};
use crate::cli::DumpFormat;

pub struct DumpArgs {
    pub input: Option<PathBuf>,
    pub format: DumpFormat,
    pub color: bool,
}

/// JSON document for `--format json`.
#[derive(Serialize)]
struct Listing<'a> {
    size: usize,
    instructions: &'a [Decoded],
}

pub fn run(args: DumpArgs) {
    let bytes = load_binary(args.input.as_deref()).unwrap_or_else(|e| fail(e));
    match render(&bytes, args.format, args.color) {
        Ok(out) => print!("{out}"),
        Err(e) => fail(e),
    }
}

pub fn render(bytes: &[u8], format: DumpFormat, color: bool) -> Result<String, CliError> {
    match format {
        DumpFormat::Text => Ok(dump(bytes, Colors::new(color))?),
        DumpFormat::Json => {
            let decoded = Instructions::decode_all(bytes)?;
            let listing = Listing {
                size: bytes.len(),
                instructions: &decoded,
            };
            let mut out = serde_json::to_string_pretty(&listing)?;
            out.push('\n');
            Ok(out)
        }
    }
}
