//! Human-readable instruction stream dump.
//!
//! One line per record, prefixed with the record's byte offset. Assignments
//! of `S`/`U` records follow on indented lines, written as literals that
//! compile back to the same bytes:
//!
//! ```text
//! 0000  I  clear all instances
//! 0004  S  "volume"  (2 values)
//!         gain = i(5)
//!         mute = False
//! ```

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::instruction::{Assignment, DecodeError, Instruction, Instructions};
use crate::value::TypedValue;

/// Render a compiled stream.
///
/// Fails on the first malformed record; nothing is rendered in that case.
pub fn dump(bytes: &[u8], colors: Colors) -> Result<String, DecodeError> {
    let mut out = String::new();
    for decoded in Instructions::new(bytes) {
        let decoded = decoded?;
        dump_instruction(&mut out, decoded.offset, &decoded.instruction, colors);
    }
    Ok(out)
}

fn dump_instruction(out: &mut String, offset: usize, instr: &Instruction, c: Colors) {
    let op = instr.opcode();
    write!(out, "{}{offset:04x}{}  {}{op}{}  ", c.dim, c.reset, c.blue, c.reset).unwrap();

    match instr {
        Instruction::ClearInstances => out.push_str("clear all instances"),
        Instruction::AddInstance { id, name } => {
            write!(out, "{} {}", quoted(id, c), quoted(name, c)).unwrap();
        }
        Instruction::RemoveInstance { name } => out.push_str(&quoted(name, c)),
        Instruction::SetValues { element, values }
        | Instruction::UpdateValues { element, values } => {
            let noun = if values.len() == 1 { "value" } else { "values" };
            write!(
                out,
                "{}  {}({} {noun}){}",
                quoted(element, c),
                c.dim,
                values.len(),
                c.reset
            )
            .unwrap();
            for value in values {
                out.push_str("\n        ");
                dump_assignment(out, value, c);
            }
        }
        Instruction::UpdateValue { element, value } => {
            write!(out, "{}  ", quoted(element, c)).unwrap();
            dump_assignment(out, value, c);
        }
        Instruction::DeleteValue { element, control } => {
            write!(out, "{} {}", quoted(element, c), quoted(control, c)).unwrap();
        }
        Instruction::Connect { sink, source } => {
            write!(out, "{} {}", quoted(sink, c), quoted(source, c)).unwrap();
        }
        Instruction::Disconnect { from, to } => {
            write!(out, "{} {}", endpoint(from, c), endpoint(to, c)).unwrap();
        }
    }
    out.push('\n');
}

fn dump_assignment(out: &mut String, a: &Assignment, c: Colors) {
    let literal = TypedValue {
        tag: a.tag,
        value: a.value.clone(),
        bytes: Vec::new(),
    }
    .to_literal();
    write!(out, "{} = {}{literal}{}", a.name, c.green, c.reset).unwrap();
}

fn quoted(s: &str, c: Colors) -> String {
    format!("{}\"{s}\"{}", c.green, c.reset)
}

/// Empty endpoints are wildcards.
fn endpoint(s: &str, c: Colors) -> String {
    if s.is_empty() {
        format!("{}*{}", c.dim, c.reset)
    } else {
        quoted(s, c)
    }
}
