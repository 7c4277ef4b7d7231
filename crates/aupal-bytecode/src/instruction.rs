//! Instruction stream decoding.
//!
//! A compiled stream has no header and no record lengths: record boundaries
//! follow from each opcode's operand layout (see [`crate::opcode`]).

use serde::Serialize;

use crate::STRING_TERMINATOR;
use crate::opcode::Opcode;
use crate::value::{TypeTag, Value};

/// One `identifier = value` operand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assignment {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: TypeTag,
    pub value: Value,
}

/// A decoded instruction record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    ClearInstances,
    AddInstance {
        id: String,
        name: String,
    },
    RemoveInstance {
        name: String,
    },
    SetValues {
        element: String,
        values: Vec<Assignment>,
    },
    UpdateValues {
        element: String,
        values: Vec<Assignment>,
    },
    UpdateValue {
        element: String,
        value: Assignment,
    },
    DeleteValue {
        element: String,
        control: String,
    },
    Connect {
        sink: String,
        source: String,
    },
    /// Empty endpoints match any endpoint.
    Disconnect {
        from: String,
        to: String,
    },
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::ClearInstances | Self::AddInstance { .. } => Opcode::AddInstance,
            Self::RemoveInstance { .. } => Opcode::RemoveInstance,
            Self::SetValues { .. } => Opcode::SetValues,
            Self::UpdateValues { .. } => Opcode::UpdateValues,
            Self::UpdateValue { .. } => Opcode::UpdateValue,
            Self::DeleteValue { .. } => Opcode::DeleteValue,
            Self::Connect { .. } => Opcode::Connect,
            Self::Disconnect { .. } => Opcode::Disconnect,
        }
    }
}

/// An instruction with the byte offset of its opcode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decoded {
    pub offset: usize,
    #[serde(flatten)]
    pub instruction: Instruction,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown opcode 0x{byte:02x} at offset {offset}")]
    UnknownOpcode { offset: usize, byte: u8 },

    #[error("record at offset {record} is truncated")]
    Truncated { record: usize },

    #[error("unterminated string at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("string at offset {offset} is not ASCII")]
    InvalidString { offset: usize },

    #[error("unknown type code 0x{byte:02x} at offset {offset}")]
    UnknownTypeCode { offset: usize, byte: u8 },

    #[error("invalid {tag} value at offset {offset}")]
    InvalidValue { offset: usize, tag: TypeTag },
}

/// Iterator over the records of a compiled stream.
///
/// Stops after the first error.
pub struct Instructions<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Instructions<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Decode a whole stream.
    pub fn decode_all(bytes: &'a [u8]) -> Result<Vec<Decoded>, DecodeError> {
        Self::new(bytes).collect()
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<Decoded, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let mut reader = Reader {
            bytes: self.bytes,
            pos: self.pos,
            record: self.pos,
        };
        match reader.instruction() {
            Ok(instruction) => {
                let offset = self.pos;
                self.pos = reader.pos;
                Some(Ok(Decoded {
                    offset,
                    instruction,
                }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    /// Offset of the opcode of the record being read.
    record: usize,
}

impl<'a> Reader<'a> {
    fn instruction(&mut self) -> Result<Instruction, DecodeError> {
        let byte = self.byte()?;
        let Some(opcode) = Opcode::from_byte(byte) else {
            return Err(DecodeError::UnknownOpcode {
                offset: self.record,
                byte,
            });
        };

        let instruction = match opcode {
            Opcode::AddInstance => {
                let id = self.string()?;
                let name = self.string()?;
                if id.is_empty() && name.is_empty() && self.peek() == Some(STRING_TERMINATOR) {
                    self.pos += 1;
                    Instruction::ClearInstances
                } else {
                    Instruction::AddInstance { id, name }
                }
            }
            Opcode::RemoveInstance => Instruction::RemoveInstance {
                name: self.string()?,
            },
            Opcode::SetValues | Opcode::UpdateValues => {
                let element = self.string()?;
                let count = self.byte()?;
                let values = (0..count)
                    .map(|_| self.assignment())
                    .collect::<Result<Vec<_>, _>>()?;
                if opcode == Opcode::SetValues {
                    Instruction::SetValues { element, values }
                } else {
                    Instruction::UpdateValues { element, values }
                }
            }
            Opcode::UpdateValue => Instruction::UpdateValue {
                element: self.string()?,
                value: self.assignment()?,
            },
            Opcode::DeleteValue => Instruction::DeleteValue {
                element: self.string()?,
                control: self.string()?,
            },
            Opcode::Connect => Instruction::Connect {
                sink: self.string()?,
                source: self.string()?,
            },
            Opcode::Disconnect => Instruction::Disconnect {
                from: self.string()?,
                to: self.string()?,
            },
        };
        Ok(instruction)
    }

    fn assignment(&mut self) -> Result<Assignment, DecodeError> {
        let name = self.string()?;
        let offset = self.pos;
        let byte = self.byte()?;
        let tag = TypeTag::from_byte(byte).ok_or(DecodeError::UnknownTypeCode { offset, byte })?;

        let offset = self.pos;
        let value = match tag.width() {
            Some(width) => {
                let bytes = self.take(width)?;
                tag.decode(bytes).ok_or(DecodeError::InvalidValue { offset, tag })?
            }
            None => Value::String(self.string()?),
        };
        Ok(Assignment { name, tag, value })
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn byte(&mut self) -> Result<u8, DecodeError> {
        let b = self.peek().ok_or(DecodeError::Truncated {
            record: self.record,
        })?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos + n;
        if end > self.bytes.len() {
            return Err(DecodeError::Truncated {
                record: self.record,
            });
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let offset = self.pos;
        let rest = &self.bytes[offset..];
        let Some(len) = rest.iter().position(|&b| b == STRING_TERMINATOR) else {
            return Err(DecodeError::UnterminatedString { offset });
        };
        let raw = &rest[..len];
        if !raw.is_ascii() {
            return Err(DecodeError::InvalidString { offset });
        }
        self.pos += len + 1;
        Ok(raw.iter().map(|&b| b as char).collect())
    }
}
