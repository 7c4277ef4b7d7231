use std::io;
use std::path::PathBuf;

use aupal_compiler::{Error, Silent};

use super::compile::compile;
use super::fail;
use super::input::open_script;

pub struct CheckArgs {
    pub input: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let mut script = open_script(args.input.as_deref()).unwrap_or_else(|e| fail(e));

    match compile(&mut script, io::sink(), Silent) {
        Ok(_) => {}
        Err(Error::Parse(e)) => {
            eprint!("{}", script.render_error(&e, args.color));
            std::process::exit(1);
        }
        Err(e) => fail(e),
    }

    // Silent on success.
}
