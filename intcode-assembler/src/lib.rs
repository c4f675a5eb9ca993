//! Intcode Assembler
//!
//! Assemble Intcode assembly language into a program image.
//!
//! ## Syntax
//!
//! - `name:` defines a label at the current address
//! - `add a, b, c` etc. use the mnemonics of [`intcode_spec::Opcode`]
//! - operands: `12` / `label` (position), `#12` / `#label` (immediate),
//!   `@12` / `@label` (relative)
//! - `.data 1, -2, label` emits raw words
//! - `;` starts a comment
//!
//! ## Example
//!
//! ```rust
//! use intcode_assembler::assemble;
//!
//! let source = r#"
//!     in value
//!     out value
//!     hlt
//! value: .data 0
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.code, vec![3, 5, 4, 5, 99, 0]);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::{parse_line, parse_source, Item, Operand, Value};
