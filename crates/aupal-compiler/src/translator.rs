//! Drives the line parser over an input and writes records as they seal.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::parser::{LineParser, ParseError, Reprocess};
use crate::{Error, Result};

/// Receives progress messages.
pub trait Observer {
    fn message(&mut self, message: &str);
}

impl<F: FnMut(&str)> Observer for F {
    fn message(&mut self, message: &str) {
        self(message)
    }
}

/// Observer that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    fn message(&mut self, _message: &str) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Physical lines read, including blank and comment lines.
    pub lines: usize,
    /// Records written.
    pub instructions: usize,
}

/// Translates one AuPaL input into `output`.
///
/// Each record is written and flushed as soon as it is sealed, so records
/// before a parse error reach the sink even though the run fails.
pub struct Translator<W, O = Silent> {
    parser: LineParser,
    output: W,
    observer: O,
    instructions: usize,
}

impl<W: Write> Translator<W> {
    pub fn new(output: W) -> Self {
        Self {
            parser: LineParser::new(),
            output,
            observer: Silent,
            instructions: 0,
        }
    }
}

impl<W: Write, O: Observer> Translator<W, O> {
    pub fn with_observer<P: Observer>(self, observer: P) -> Translator<W, P> {
        Translator {
            parser: self.parser,
            output: self.output,
            observer,
            instructions: self.instructions,
        }
    }

    pub fn execute(&mut self, input: impl BufRead) -> Result<Summary> {
        self.observer.message("Translating input...");

        for line in input.lines() {
            self.add_line(&line?)?;
        }
        self.parser.close();
        self.emit_if_sealed()?;

        let summary = Summary {
            lines: self.parser.line_number(),
            instructions: self.instructions,
        };
        debug!(
            lines = summary.lines,
            instructions = summary.instructions,
            "translation finished"
        );

        self.observer.message("Translation succeeded");
        self.observer.message(&format!("Parsed {} lines", summary.lines));
        self.observer
            .message(&format!("Wrote {} instructions", summary.instructions));
        self.observer.message("Done");
        Ok(summary)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn add_line(&mut self, line: &str) -> Result<()> {
        loop {
            let again = self.parser.parse(line)?;
            self.emit_if_sealed()?;
            if again == Reprocess::No {
                return Ok(());
            }
        }
    }

    fn emit_if_sealed(&mut self) -> Result<()> {
        let emission = self.parser.emission_mut();
        if !emission.is_sealed() {
            return Ok(());
        }
        let record = emission.take();
        self.instructions += 1;

        self.observer
            .message(&format!("Line {:3}: {}", record.line, record.description));
        debug!(
            line = record.line,
            size = record.bytes.len(),
            description = %record.description,
            "record written"
        );
        self.output.write_all(&record.bytes)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Compile an in-memory source.
pub fn translate(source: &str) -> std::result::Result<Vec<u8>, ParseError> {
    let mut translator = Translator::new(Vec::new());
    match translator.execute(source.as_bytes()) {
        Ok(_) => Ok(translator.into_output()),
        Err(Error::Parse(e)) => Err(e),
        Err(Error::Io(e)) => unreachable!("in-memory translation does no fallible I/O: {e}"),
    }
}
