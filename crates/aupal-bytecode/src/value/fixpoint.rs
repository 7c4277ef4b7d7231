//! 16-bit fixed-point numbers.
//!
//! Layout (little-endian on the wire):
//!
//! ```text
//!  15 14 | 13   | 12 ............ 4 | 3 ...... 0
//!  unused| sign | integer part (9b) | sixteenths
//! ```
//!
//! The magnitude is stored unsigned; bit 13 carries the sign. The range is
//! therefore symmetric: `[-511.9375, 511.9375]` in steps of 1/16.

use serde::Serialize;

use super::ValueError;
use super::codec::parse_float;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(into = "f64")]
pub struct FixPoint(u16);

impl FixPoint {
    pub const MIN: f64 = -511.9375;
    pub const MAX: f64 = 511.9375;

    /// 1/16 expressed in units of 1/10000.
    const SCALED_PRECISION: u32 = 625;
    const SIGN_BIT: u16 = 1 << 13;
    const INTEGER_MASK: u16 = 0x1ff;
    const FRACTION_MASK: u16 = 0xf;

    /// Parse a decimal literal.
    pub fn parse(literal: &str) -> Result<Self, ValueError> {
        Self::from_f64(parse_float(literal)?)
    }

    pub fn from_f64(v: f64) -> Result<Self, ValueError> {
        if v.is_nan() {
            return Err(ValueError::InvalidFloat(format!("{v:?}")));
        }
        if v < Self::MIN {
            return Err(ValueError::TooSmall {
                value: format!("{v:?}"),
                min: format!("{:?}", Self::MIN),
            });
        }
        if v > Self::MAX {
            return Err(ValueError::TooLarge {
                value: format!("{v:?}"),
                max: format!("{:?}", Self::MAX),
            });
        }

        let magnitude = v.abs();
        let integer = magnitude.trunc();
        // f64::round rounds half away from zero.
        let micro = ((magnitude - integer) * 10000.0).round() as u32;
        if micro % Self::SCALED_PRECISION != 0 {
            return Err(ValueError::NotRepresentable {
                value: format!("{v:?}"),
            });
        }

        // A fraction that rounds up to a whole unit carries into the integer part.
        let mut bits = ((integer as u16) << 4) + (micro / Self::SCALED_PRECISION) as u16;
        if v < 0.0 {
            bits |= Self::SIGN_BIT;
        }
        Ok(Self(bits))
    }

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn to_bits(self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn is_negative(self) -> bool {
        self.0 & Self::SIGN_BIT != 0
    }

    pub fn integer_part(self) -> u16 {
        (self.0 >> 4) & Self::INTEGER_MASK
    }

    /// Fractional part in sixteenths.
    pub fn sixteenths(self) -> u16 {
        self.0 & Self::FRACTION_MASK
    }

    pub fn to_f64(self) -> f64 {
        let magnitude = f64::from(self.integer_part()) + f64::from(self.sixteenths()) / 16.0;
        if self.is_negative() { -magnitude } else { magnitude }
    }
}

impl From<FixPoint> for f64 {
    fn from(v: FixPoint) -> Self {
        v.to_f64()
    }
}

impl std::fmt::Display for FixPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
