//! Instruction opcodes.
//!
//! Every record starts with one opcode byte, the ASCII code of the command
//! letter that produced it. The opcode alone determines the operand layout:
//!
//! | Opcode | Operands                                               |
//! | ------ | ------------------------------------------------------ |
//! | `I`    | `0 0 0` (clear all) or `id\0 name\0`                   |
//! | `i`    | `name\0`                                               |
//! | `S`    | `name\0 count (ident\0 code value)*`                   |
//! | `U`    | `name\0 count (ident\0 code value)*`                   |
//! | `u`    | `name\0 ident\0 code value`                            |
//! | `d`    | `name\0 control\0`                                     |
//! | `C`    | `sink\0 source\0`                                      |
//! | `c`    | `from\0 to\0` (empty strings act as wildcards)         |

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[repr(u8)]
pub enum Opcode {
    /// Add an instance, or clear all instances.
    AddInstance = b'I',
    RemoveInstance = b'i',
    /// Replace all values of an element.
    SetValues = b'S',
    /// Update a subset of values of an element.
    UpdateValues = b'U',
    UpdateValue = b'u',
    DeleteValue = b'd',
    Connect = b'C',
    Disconnect = b'c',
}

impl Opcode {
    pub const ALL: [Opcode; 8] = [
        Self::AddInstance,
        Self::RemoveInstance,
        Self::SetValues,
        Self::UpdateValues,
        Self::UpdateValue,
        Self::DeleteValue,
        Self::Connect,
        Self::Disconnect,
    ];

    /// Decode from the wire byte.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'I' => Some(Self::AddInstance),
            b'i' => Some(Self::RemoveInstance),
            b'S' => Some(Self::SetValues),
            b'U' => Some(Self::UpdateValues),
            b'u' => Some(Self::UpdateValue),
            b'd' => Some(Self::DeleteValue),
            b'C' => Some(Self::Connect),
            b'c' => Some(Self::Disconnect),
            _ => None,
        }
    }

    /// Look up the opcode for a source command letter.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_byte(c as u8)
        } else {
            None
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        self.to_byte() as char
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
