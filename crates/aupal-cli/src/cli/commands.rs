//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("aupalc")
        .about("Compile AuPaL scripts into binary instruction streams")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Compile a script to a binary instruction stream.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile an AuPaL script")
        .override_usage(
            "\
  aupalc compile [INPUT] [-o <FILE>]
  aupalc compile [INPUT] -v",
        )
        .after_help(
            r#"EXAMPLES:
  aupalc compile mixer.aupal -o mixer.bin   # file to file
  aupalc compile < mixer.aupal > mixer.bin  # stdin to stdout
  aupalc compile mixer.aupal -o - -v        # show each record on stderr"#,
        )
        .arg(input_arg())
        .arg(output_file_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Compile and discard the output.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate an AuPaL script")
        .override_usage("  aupalc check [INPUT]")
        .after_help(
            r#"EXAMPLES:
  aupalc check mixer.aupal            # silent on success
  cat mixer.aupal | aupalc check      # from stdin"#,
        )
        .arg(input_arg())
        .arg(color_arg())
}

/// Disassemble a compiled instruction stream.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show a compiled instruction stream")
        .override_usage("  aupalc dump [BINARY] [--format <FORMAT>]")
        .after_help(
            r#"EXAMPLES:
  aupalc dump mixer.bin                 # one line per record
  aupalc dump mixer.bin --format json   # decoded records as JSON
  aupalc compile mixer.aupal | aupalc dump"#,
        )
        .arg(binary_arg())
        .arg(format_arg())
        .arg(color_arg())
}
