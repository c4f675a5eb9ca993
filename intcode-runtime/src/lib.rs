//! # Intcode Runtime
//!
//! Execute Intcode programs on a suspendable, forkable virtual machine.
//!
//! ## Features
//!
//! - **Sparse memory**: unbounded non-negative address space, zero by default
//! - **10 instructions**: add, mul, in, out, jt, jf, lt, eq, arb, hlt
//! - **Suspension**: `step` returns at every output and unmet input request
//! - **Forking**: `VM::clone` is a copy-on-write snapshot of the whole machine
//!
//! ## Example
//!
//! ```rust
//! use intcode_runtime::{VM, VMConfig};
//! use intcode_spec::Program;
//!
//! let program = Program::new(vec![3, 0, 4, 0, 99]);
//! let mut vm = VM::new(&program, vec![7], VMConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![7]);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod io;
pub mod execute;
pub mod vm;

pub use state::{StepResult, VMState};
pub use memory::{Memory, PAGE_SIZE};
pub use io::IOHandler;
pub use vm::{ExecutionResult, VMConfig, VM};
pub use error::RuntimeError;

use intcode_spec::{Program, Word};

/// Simple execution helper
///
/// Runs a program to completion with the given inputs and returns the outputs.
pub fn run_program(program: &Program, inputs: Vec<Word>) -> Result<Vec<Word>, RuntimeError> {
    let mut vm = VM::new(program, inputs, VMConfig::default());
    Ok(vm.run()?.outputs)
}
