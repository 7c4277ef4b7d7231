//! Binary instruction format for AuPaL.
//!
//! This crate contains:
//! - Opcodes and their operand layouts
//! - Value type tags and the codec registry (integers, booleans, doubles,
//!   fixed-point, strings)
//! - An instruction stream decoder and human-readable dump
//! - Terminal colors shared with the CLI

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod dump;
pub mod instruction;
pub mod opcode;
pub mod value;

pub use colors::Colors;
pub use dump::dump;
pub use instruction::{Assignment, DecodeError, Decoded, Instruction, Instructions};
pub use opcode::Opcode;
pub use value::{FixPoint, TypeTag, TypedValue, Value, ValueError};

/// Terminator appended to every string operand.
pub const STRING_TERMINATOR: u8 = 0;

#[cfg(test)]
mod dump_tests;
