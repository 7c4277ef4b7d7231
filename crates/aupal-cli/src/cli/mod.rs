mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

use clap::ValueEnum;

pub use commands::build_cli;
pub use dispatch::{CheckParams, CompileParams, DumpParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Piping either stream disables colors: `aupalc dump out.bin | less`
            // keeps diagnostics on a TTY while the dump goes to a pipe.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

/// Output format of `aupalc dump`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
}
