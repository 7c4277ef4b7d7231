//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, compile_command, dump_command};

#[test]
fn compile_params_from_flags() {
    let m = compile_command()
        .try_get_matches_from(["compile", "mix.aupal", "-o", "mix.bin", "-v", "--color", "never"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.input, Some(PathBuf::from("mix.aupal")));
    assert_eq!(params.output, Some(PathBuf::from("mix.bin")));
    assert!(params.verbose);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn compile_defaults_to_streams() {
    let m = compile_command().try_get_matches_from(["compile"]).unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.input, None);
    assert_eq!(params.output, None);
    assert!(!params.verbose);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn compile_args_resolve_color() {
    let m = compile_command()
        .try_get_matches_from(["compile", "--color", "always"])
        .unwrap();
    let args: crate::commands::compile::CompileArgs = CompileParams::from_matches(&m).into();
    assert!(args.color);
}

#[test]
fn check_takes_input_only() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.input, Some(PathBuf::from("-")));

    assert!(check_command().try_get_matches_from(["check", "a", "-o", "b"]).is_err());
}

#[test]
fn dump_format() {
    let m = dump_command().try_get_matches_from(["dump", "mix.bin"]).unwrap();
    assert_eq!(DumpParams::from_matches(&m).format, DumpFormat::Text);

    let m = dump_command()
        .try_get_matches_from(["dump", "mix.bin", "--format", "json"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).format, DumpFormat::Json);

    assert!(dump_command().try_get_matches_from(["dump", "--format", "yaml"]).is_err());
}

#[test]
fn json_dump_is_never_colored() {
    let m = dump_command()
        .try_get_matches_from(["dump", "--format", "json", "--color", "always"])
        .unwrap();
    let args: crate::commands::dump::DumpArgs = DumpParams::from_matches(&m).into();
    assert!(!args.color);
}

#[test]
fn invalid_color_is_rejected() {
    assert!(compile_command().try_get_matches_from(["compile", "--color", "sometimes"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["aupalc"]).is_err());
    assert!(build_cli().try_get_matches_from(["aupalc", "link"]).is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("compile"));
    assert!(help.contains("check"));
    assert!(help.contains("dump"));
}
