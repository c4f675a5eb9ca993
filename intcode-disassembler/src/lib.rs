//! # Intcode Disassembler
//!
//! Turn Intcode memory images back into assembler syntax.
//!
//! Code and data share one address space, so disassembly is a linear sweep:
//! words that do not decode as a complete instruction are emitted as
//! `.data` and the sweep moves on by one word.
//!
//! ## Example
//!
//! ```rust
//! use intcode_spec::Program;
//! use intcode_disassembler::disassemble;
//!
//! let program = Program::new(vec![3, 0, 4, 0, 99]);
//! let asm = disassemble(&program);
//! assert!(asm.contains("in 0"));
//! assert!(asm.contains("hlt"));
//! ```

pub mod error;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, disassemble_at, Disassembled};
pub use formatter::{format, format_operand};
