//! Typed values and the codec registry.
//!
//! Every value on the wire is preceded by a one-character type code (see
//! [`TypeTag`]). Encoding goes from an ASCII literal to bytes and never
//! truncates or wraps: out-of-range literals are rejected with a
//! [`ValueError`].

mod codec;
mod error;
mod fixpoint;
mod type_tag;

#[cfg(test)]
mod type_tag_tests;

pub use error::ValueError;
pub use fixpoint::FixPoint;
pub use type_tag::TypeTag;

use serde::Serialize;

/// A decoded value, independent of its wire width.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
    Double(f64),
    FixPoint(FixPoint),
    String(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::FixPoint(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A value together with its type tag and wire encoding.
///
/// For strings, `bytes` holds the raw characters; the NUL terminator is
/// added when the value is emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedValue {
    pub tag: TypeTag,
    pub value: Value,
    pub bytes: Vec<u8>,
}

impl TypedValue {
    /// Render as an AuPaL literal that encodes back to the same bytes.
    pub fn to_literal(&self) -> String {
        match &self.value {
            Value::String(s) if s.contains('"') => format!("'{s}'"),
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(_) => self.value.to_string(),
            v => format!("{}({v})", self.tag.code()),
        }
    }
}

/// Whether `s` can travel as a NUL-terminated ASCII string.
pub fn is_wire_string(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii() && b != 0)
}
