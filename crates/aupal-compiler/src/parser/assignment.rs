//! `identifier = literal` assignments.
//!
//! Literal dispatch, in order:
//! 1. plain base-10 integer: signed 16-bit (`i`)
//! 2. `'...'` or `"..."`: string, quotes removed
//! 3. `True` / `False`: boolean
//! 4. `<code>(<inner>)`: `<inner>` encoded with the tag for `<code>`

use aupal_bytecode::{STRING_TERMINATOR, TypeTag, TypedValue};

use super::error::ParseErrorKind;
use crate::emission::Emission;

/// A parsed assignment with its value already encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: TypedValue,
}

impl Assignment {
    /// Append `name\0 code value` to the record under construction.
    pub fn emit(&self, emission: &mut Emission) {
        emission.push_str(&self.name);
        emission.push_byte(self.value.tag.code() as u8);
        emission.push_bytes(&self.value.bytes);
        if self.value.tag == TypeTag::String {
            emission.push_byte(STRING_TERMINATOR);
        }
    }
}

pub fn parse_assignment(text: &str) -> Result<Assignment, ParseErrorKind> {
    let mut sides = text.split('=');
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ParseErrorKind::AssignmentExpected);
    };

    let name = lhs.trim();
    if !is_identifier(name) {
        return Err(ParseErrorKind::IdentifierExpected(name.to_string()));
    }

    Ok(Assignment {
        name: name.to_string(),
        value: parse_literal(rhs.trim())?,
    })
}

pub fn parse_literal(spec: &str) -> Result<TypedValue, ParseErrorKind> {
    if is_plain_integer(spec) {
        return Ok(TypeTag::DEFAULT_INTEGER.encode(spec)?);
    }
    if let Some(inner) = unquote(spec) {
        return Ok(TypeTag::String.encode(inner)?);
    }
    if spec == "True" || spec == "False" {
        return Ok(TypeTag::Bool.encode(spec)?);
    }
    if let Some((tag, inner)) = explicit(spec) {
        return Ok(tag.encode(inner)?);
    }
    Err(ParseErrorKind::InvalidValueSpec(spec.to_string()))
}

/// Strip matching single or double quotes.
pub(super) fn unquote(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'"' | b'\'')), Some(&close)) if bytes.len() >= 2 && open == close => {
            Some(&s[1..s.len() - 1])
        }
        _ => None,
    }
}

fn explicit(spec: &str) -> Option<(TypeTag, &str)> {
    let mut chars = spec.chars();
    let tag = TypeTag::from_code(chars.next()?)?;
    let rest = chars.as_str();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some((tag, inner))
}

fn is_plain_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
