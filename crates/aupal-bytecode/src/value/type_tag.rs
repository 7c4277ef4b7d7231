//! Value type tags.
//!
//! The single-character codes are shared with the runtime's configuration
//! store, so they must never change.

use serde::{Serialize, Serializer};

use super::codec::{self, IntSpec};
use super::{FixPoint, TypedValue, Value, ValueError};

/// Type tag of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeTag {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Bool,
    /// IEEE-754 binary64, native byte order.
    Double,
    /// 16-bit packed fixed-point, see [`FixPoint`].
    FixPoint,
    /// NUL-terminated ASCII.
    String,
}

impl TypeTag {
    pub const ALL: [TypeTag; 12] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Bool,
        Self::Double,
        Self::FixPoint,
        Self::String,
    ];

    /// Tag given to bare integer literals such as `gain = 5`.
    pub const DEFAULT_INTEGER: TypeTag = TypeTag::I16;

    pub fn code(self) -> char {
        match self {
            Self::U8 => 'y',
            Self::U16 => 'q',
            Self::U32 => 'u',
            Self::U64 => 't',
            Self::I8 => 'Y',
            Self::I16 => 'i',
            Self::I32 => 'n',
            Self::I64 => 'x',
            Self::Bool => 'b',
            Self::Double => 'd',
            Self::FixPoint => 'D',
            Self::String => 's',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.code() == c)
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_code(b as char)
    }

    /// Encoded width in bytes, `None` for strings.
    pub fn width(self) -> Option<usize> {
        match self {
            Self::U8 | Self::I8 | Self::Bool => Some(1),
            Self::U16 | Self::I16 | Self::FixPoint => Some(2),
            Self::U32 | Self::I32 => Some(4),
            Self::U64 | Self::I64 | Self::Double => Some(8),
            Self::String => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::FixPoint => "fixpoint",
            Self::String => "string",
        }
    }

    fn int_spec(self) -> Option<IntSpec> {
        let (width, signed) = match self {
            Self::U8 => (1, false),
            Self::U16 => (2, false),
            Self::U32 => (4, false),
            Self::U64 => (8, false),
            Self::I8 => (1, true),
            Self::I16 => (2, true),
            Self::I32 => (4, true),
            Self::I64 => (8, true),
            _ => return None,
        };
        Some(IntSpec::new(width, signed))
    }

    /// Encode an ASCII literal.
    pub fn encode(self, literal: &str) -> Result<TypedValue, ValueError> {
        let (value, bytes) = match self {
            Self::Bool => codec::encode_bool(literal)?,
            Self::Double => codec::encode_double(literal)?,
            Self::FixPoint => {
                let fix = FixPoint::parse(literal)?;
                (Value::FixPoint(fix), fix.to_le_bytes().to_vec())
            }
            Self::String => codec::encode_string(literal)?,
            int => {
                let spec = int.int_spec().expect("remaining tags are integers");
                spec.encode(literal)?
            }
        };
        Ok(TypedValue {
            tag: self,
            value,
            bytes,
        })
    }

    /// Decode wire bytes (without a string's terminator).
    ///
    /// Returns `None` when `bytes` has the wrong width or holds an invalid
    /// encoding for this tag.
    pub fn decode(self, bytes: &[u8]) -> Option<Value> {
        if self.width().is_some_and(|width| bytes.len() != width) {
            return None;
        }
        match self {
            Self::Bool => codec::decode_bool(bytes),
            Self::Double => codec::decode_double(bytes),
            Self::FixPoint => Some(Value::FixPoint(FixPoint::from_bits(u16::from_le_bytes([
                bytes[0], bytes[1],
            ])))),
            Self::String => codec::decode_string(bytes),
            int => int.int_spec().map(|spec| spec.decode(bytes)),
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
