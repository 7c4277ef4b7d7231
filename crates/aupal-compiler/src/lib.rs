//! AuPaL compiler: line parser, record builder and translator.
//!
//! This crate turns AuPaL source text into the binary instruction stream
//! described by `aupal-bytecode`:
//! - `emission` - builder for the record under construction
//! - `parser` - indentation-aware line parser and assignment grammar
//! - `translator` - drives the parser over an input and writes records out

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emission;
pub mod parser;
pub mod translator;

#[cfg(test)]
pub mod test_utils;


pub use emission::{Emission, Record};
pub use parser::{LineParser, ParseError, ParseErrorKind, Reprocess};
pub use translator::{Observer, Silent, Summary, Translator, translate};

/// Errors that can occur while translating an input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for translation.
pub type Result<T> = std::result::Result<T, Error>;
