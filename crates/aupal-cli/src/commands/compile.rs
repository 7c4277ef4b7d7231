use std::io::{BufRead, Write};
use std::path::PathBuf;

use aupal_compiler::{Error, Observer, Silent, Summary, Translator};
use tracing::debug;

use super::fail;
use super::input::{Script, open_output, open_script};

pub struct CompileArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let mut script = open_script(args.input.as_deref()).unwrap_or_else(|e| fail(e));
    let output = open_output(args.output.as_deref()).unwrap_or_else(|e| fail(e));

    let result = if args.verbose {
        compile(&mut script, output, |message: &str| eprintln!("{message}"))
    } else {
        compile(&mut script, output, Silent)
    };

    match result {
        Ok(summary) => {
            debug!(instructions = summary.instructions, output = ?args.output, "compiled");
        }
        Err(Error::Parse(e)) => {
            eprint!("{}", script.render_error(&e, args.color));
            std::process::exit(1);
        }
        Err(e) => fail(e),
    }
}

/// Translate `script` into `output` one record at a time. Records written
/// before a parse error stay in `output`.
pub fn compile<R: BufRead, W: Write>(
    script: &mut Script<R>,
    output: W,
    observer: impl Observer,
) -> Result<Summary, Error> {
    let mut translator = Translator::new(output).with_observer(observer);
    translator.execute(script)
}
