//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, DumpFormat};
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;

pub struct CompileParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_flag("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub input: Option<PathBuf>,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            format: m.get_one::<DumpFormat>("format").copied().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            format: p.format,
            // JSON output is never colored.
            color: p.format == DumpFormat::Text && p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
