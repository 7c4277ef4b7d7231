//! Builder for the instruction record under construction.
//!
//! A record is observable only once it is sealed. The lifecycle is
//! `Empty -> Building -> Sealed -> Empty`; any other transition is a bug in
//! the caller and panics.

use aupal_bytecode::STRING_TERMINATOR;

/// A complete instruction record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// 1-based source line the record started on.
    pub line: usize,
    pub description: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Empty,
    Building {
        line: usize,
        bytes: Vec<u8>,
    },
    Sealed(Record),
}

#[derive(Debug, Default)]
pub struct Emission {
    state: State,
}

impl Emission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, line: usize) {
        match self.state {
            State::Empty => {
                self.state = State::Building {
                    line,
                    bytes: Vec::new(),
                }
            }
            State::Building { .. } => panic!("cannot start a record while building another"),
            State::Sealed(_) => panic!("cannot start a record before the sealed one is taken"),
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.buffer().push(byte);
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buffer().extend_from_slice(bytes);
    }

    /// Append a string operand followed by its terminator.
    pub fn push_str(&mut self, s: &str) {
        let buffer = self.buffer();
        buffer.extend_from_slice(s.as_bytes());
        buffer.push(STRING_TERMINATOR);
    }

    pub fn commit(&mut self, description: impl Into<String>) {
        match std::mem::take(&mut self.state) {
            State::Building { line, bytes } => {
                self.state = State::Sealed(Record {
                    line,
                    description: description.into(),
                    bytes,
                })
            }
            State::Sealed(_) => panic!("cannot re-commit a sealed record"),
            State::Empty => panic!("cannot commit a record that was never started"),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    pub fn is_building(&self) -> bool {
        matches!(self.state, State::Building { .. })
    }

    pub fn is_sealed(&self) -> bool {
        matches!(self.state, State::Sealed(_))
    }

    pub fn line(&self) -> usize {
        self.sealed("line number").line
    }

    pub fn description(&self) -> &str {
        &self.sealed("description").description
    }

    /// Hand out the sealed record and reset to the empty state.
    pub fn take(&mut self) -> Record {
        match std::mem::take(&mut self.state) {
            State::Sealed(record) => record,
            _ => panic!("cannot take an incomplete record"),
        }
    }

    /// Drop a partially built record.
    pub fn discard(&mut self) {
        if self.is_sealed() {
            panic!("cannot discard a sealed record");
        }
        self.state = State::Empty;
    }

    fn buffer(&mut self) -> &mut Vec<u8> {
        match &mut self.state {
            State::Building { bytes, .. } => bytes,
            State::Empty => panic!("cannot append to a record that was never started"),
            State::Sealed(_) => panic!("cannot append to a sealed record"),
        }
    }

    fn sealed(&self, what: &str) -> &Record {
        match &self.state {
            State::Sealed(record) => record,
            _ => panic!("cannot read the {what} of an incomplete record"),
        }
    }
}
