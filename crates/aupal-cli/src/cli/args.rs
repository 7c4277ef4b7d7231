//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::DumpFormat;

/// AuPaL source file (positional, `-` or absent for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("AuPaL script to compile (stdin if absent or '-')")
}

/// Compiled instruction stream (positional, `-` or absent for stdin).
pub fn binary_arg() -> Arg {
    Arg::new("input")
        .value_name("BINARY")
        .value_parser(value_parser!(PathBuf))
        .help("Compiled instruction stream (stdin if absent or '-')")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (stdout if absent or '-')")
}

/// Progress messages (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Tell what is being done")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Dump format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(value_parser!(DumpFormat))
        .help("Output format")
}
