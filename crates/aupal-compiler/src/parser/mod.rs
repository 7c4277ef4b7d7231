//! Indentation-aware line parser.
//!
//! The parser consumes one physical line at a time. Commands that take a
//! block (`S`, `U`) switch it into block mode; the block's indentation width
//! is fixed by its first body line and the block ends at the next unindented
//! line or at end of input. Ending a block on a command line seals the block
//! record first and asks the caller to feed the same line again.

mod assignment;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use aupal_bytecode::Opcode;
use tracing::trace;

pub use assignment::{Assignment, parse_assignment, parse_literal};
pub use error::{Arity, ParseError, ParseErrorKind};

use crate::emission::Emission;

/// The count of a block's assignments is a single byte.
pub const MAX_ASSIGNMENTS: usize = u8::MAX as usize;

/// Whether the line just parsed has to be parsed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Reprocess {
    No,
    Yes,
}

#[derive(Debug)]
struct Block {
    opcode: Opcode,
    element: String,
    /// Fixed by the first body line.
    indent: Option<usize>,
    assignments: Vec<Assignment>,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    ExpectingCommand,
    ReadingBlock(Block),
}

#[derive(Debug, Default)]
pub struct LineParser {
    line: usize,
    state: State,
    emission: Emission,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn is_in_block(&self) -> bool {
        matches!(self.state, State::ReadingBlock(_))
    }

    pub fn emission(&self) -> &Emission {
        &self.emission
    }

    /// The record builder. A sealed record must be taken before the next
    /// call to [`parse`](Self::parse) or [`close`](Self::close).
    pub fn emission_mut(&mut self) -> &mut Emission {
        &mut self.emission
    }

    /// Parse one physical line (with or without its newline).
    ///
    /// On error the partially built record is dropped and the parser is back
    /// to expecting a command.
    pub fn parse(&mut self, line: &str) -> Result<Reprocess, ParseError> {
        self.line += 1;
        self.parse_line(line).map_err(|kind| {
            self.emission.discard();
            self.state = State::ExpectingCommand;
            ParseError::new(self.line, kind)
        })
    }

    /// Flush an open block at end of input.
    pub fn close(&mut self) {
        if self.is_in_block() {
            self.end_block();
        }
    }

    fn parse_line(&mut self, raw: &str) -> Result<Reprocess, ParseErrorKind> {
        let line = raw.trim_end();
        let content = line.trim_start();
        if content.is_empty() || content.starts_with('#') {
            return Ok(Reprocess::No);
        }

        let leading = line.len() - line.trim_start_matches(' ').len();
        let body = match &mut self.state {
            State::ExpectingCommand => line,
            State::ReadingBlock(block) => {
                let indent = match block.indent {
                    Some(indent) => indent,
                    None if leading == 0 => return Err(ParseErrorKind::IndentationExpected),
                    None => *block.indent.insert(leading),
                };
                if leading >= indent {
                    &line[indent..]
                } else if leading > 0 {
                    return Err(ParseErrorKind::NotEnoughIndentation);
                } else {
                    self.end_block();
                    self.line -= 1;
                    trace!(line = self.line + 1, "reprocessing line after block");
                    return Ok(Reprocess::Yes);
                }
            }
        };

        if body.starts_with(' ') {
            return Err(ParseErrorKind::TooMuchIndentation);
        }

        match &mut self.state {
            State::ExpectingCommand => self.command(body)?,
            State::ReadingBlock(block) => {
                if block.assignments.len() == MAX_ASSIGNMENTS {
                    return Err(ParseErrorKind::TooManyAssignments {
                        element: block.element.clone(),
                        max: MAX_ASSIGNMENTS,
                    });
                }
                block.assignments.push(parse_assignment(body)?);
            }
        }
        Ok(Reprocess::No)
    }

    fn open_block(&mut self, opcode: Opcode, element: &str) {
        trace!(line = self.line, %opcode, element, "block opened");
        self.state = State::ReadingBlock(Block {
            opcode,
            element: element.to_string(),
            indent: None,
            assignments: Vec::new(),
        });
    }

    fn end_block(&mut self) {
        let State::ReadingBlock(block) = std::mem::take(&mut self.state) else {
            return;
        };
        trace!(
            element = %block.element,
            assignments = block.assignments.len(),
            "block closed"
        );

        let count = u8::try_from(block.assignments.len()).expect("block size is capped");
        self.emission.push_byte(count);
        for assignment in &block.assignments {
            assignment.emit(&mut self.emission);
        }

        let action = if block.opcode == Opcode::SetValues {
            "set all"
        } else {
            "update some"
        };
        self.emission.commit(format!(
            "{} ({action} values for element \"{}\")",
            block.opcode, block.element
        ));
    }
}
