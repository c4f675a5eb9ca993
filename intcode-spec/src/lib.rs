//! # Intcode Specification
//!
//! Word-addressed register machine with a sparse integer address space.
//!
//! ## Key Features
//! - 64-bit signed words; code and data share one address space
//! - Two-digit opcodes, parameter modes packed in the leading digits
//! - Three parameter modes: position, immediate, relative
//! - A single relative-base register adjusted by `arb`
//! - Suspendable input/output (see `intcode-runtime`)

pub mod opcode;
pub mod instruction;
pub mod error;
pub mod program;

pub use opcode::{Opcode, ParamMode};
pub use instruction::Instruction;
pub use error::{IntcodeError, Result};
pub use program::Program;

/// Machine word
pub type Word = i64;

/// Memory address (valid addresses are non-negative)
pub type Address = i64;

/// Largest number of parameters any instruction takes
pub const MAX_PARAMS: usize = 3;

/// Divisor that separates the opcode from the mode digits
pub const OPCODE_RADIX: Word = 100;
