pub mod check;
pub mod compile;
pub mod dump;
pub mod input;


use std::io;
use std::path::PathBuf;

use aupal_bytecode::DecodeError;

/// Failures outside of the compiler itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed instruction stream: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to serialize instructions: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print `error: <message>` and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
