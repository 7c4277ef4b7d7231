//! Literal-to-bytes rules for the scalar tags.

use std::num::IntErrorKind;

use super::{Value, ValueError, is_wire_string};

/// Width and signedness of an integer tag, with its inclusive bounds.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IntSpec {
    width: usize,
    signed: bool,
    min: i128,
    max: i128,
}

impl IntSpec {
    pub(crate) fn new(width: usize, signed: bool) -> Self {
        let bits = 8 * width as u32 - u32::from(signed);
        let boundary = 1i128 << bits;
        Self {
            width,
            signed,
            min: if signed { -boundary } else { 0 },
            max: boundary - 1,
        }
    }

    pub(crate) fn encode(self, literal: &str) -> Result<(Value, Vec<u8>), ValueError> {
        let text = literal.trim();
        let n = match text.parse::<i128>() {
            Ok(n) => n,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow => self.too_large(text.to_string()),
                    IntErrorKind::NegOverflow => self.too_small(text.to_string()),
                    _ => ValueError::InvalidInteger(literal.to_string()),
                });
            }
        };

        if n < self.min {
            return Err(self.too_small(n.to_string()));
        }
        if n > self.max {
            return Err(self.too_large(n.to_string()));
        }

        // Two's complement truncation is exact once the range is checked.
        let bytes = n.to_le_bytes()[..self.width].to_vec();
        let value = if self.signed {
            Value::Signed(n as i64)
        } else {
            Value::Unsigned(n as u64)
        };
        Ok((value, bytes))
    }

    /// `bytes` must hold exactly `width` bytes.
    pub(crate) fn decode(self, bytes: &[u8]) -> Value {
        let mut buf = [0u8; 8];
        buf[..self.width].copy_from_slice(bytes);
        let raw = u64::from_le_bytes(buf);
        if !self.signed {
            return Value::Unsigned(raw);
        }
        let shift = 64 - 8 * self.width as u32;
        Value::Signed(((raw << shift) as i64) >> shift)
    }

    fn too_small(self, value: String) -> ValueError {
        ValueError::TooSmall {
            value,
            min: self.min.to_string(),
        }
    }

    fn too_large(self, value: String) -> ValueError {
        ValueError::TooLarge {
            value,
            max: self.max.to_string(),
        }
    }
}

pub(crate) fn encode_bool(literal: &str) -> Result<(Value, Vec<u8>), ValueError> {
    match literal {
        "True" => Ok((Value::Bool(true), vec![1])),
        "False" => Ok((Value::Bool(false), vec![0])),
        _ => Err(ValueError::InvalidBoolean(literal.to_string())),
    }
}

pub(crate) fn decode_bool(bytes: &[u8]) -> Option<Value> {
    match bytes {
        [0] => Some(Value::Bool(false)),
        [1] => Some(Value::Bool(true)),
        _ => None,
    }
}

pub(crate) fn parse_float(literal: &str) -> Result<f64, ValueError> {
    literal
        .trim()
        .parse::<f64>()
        .map_err(|_| ValueError::InvalidFloat(literal.to_string()))
}

pub(crate) fn encode_double(literal: &str) -> Result<(Value, Vec<u8>), ValueError> {
    let v = parse_float(literal)?;
    Ok((Value::Double(v), v.to_ne_bytes().to_vec()))
}

pub(crate) fn decode_double(bytes: &[u8]) -> Option<Value> {
    let buf: [u8; 8] = bytes.try_into().ok()?;
    Some(Value::Double(f64::from_ne_bytes(buf)))
}

pub(crate) fn encode_string(literal: &str) -> Result<(Value, Vec<u8>), ValueError> {
    if !is_wire_string(literal) {
        return Err(ValueError::InvalidString(literal.to_string()));
    }
    Ok((Value::String(literal.to_string()), literal.as_bytes().to_vec()))
}

pub(crate) fn decode_string(bytes: &[u8]) -> Option<Value> {
    let s = std::str::from_utf8(bytes).ok()?;
    is_wire_string(s).then(|| Value::String(s.to_string()))
}
