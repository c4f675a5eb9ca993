//! Runtime error types for the Intcode VM

use thiserror::Error;
use intcode_spec::{Address, IntcodeError, Word};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] IntcodeError),

    #[error("Invalid opcode {opcode} at address {pc}")]
    InvalidOpcode { pc: Address, opcode: Word },

    #[error("Invalid parameter mode {mode} at address {pc}")]
    InvalidParameterMode { pc: Address, mode: Word },

    #[error("Immediate-mode write target at address {pc}")]
    InvalidWriteMode { pc: Address },

    #[error("Negative memory address: {address}")]
    NegativeAddress { address: Address },

    #[error("Program halted after {produced} of {expected} expected outputs")]
    UnexpectedHalt { expected: usize, produced: usize },

    #[error("Input required at address {pc} but the input queue is empty")]
    InputRequired { pc: Address },

    #[error("Cycle limit exceeded: {limit}")]
    CycleLimitExceeded { limit: u64 },

    #[error("Address arithmetic overflowed at address {pc}")]
    AddressOverflow { pc: Address },
}

impl RuntimeError {
    /// Faults that mean the program itself is malformed
    ///
    /// Fatal errors abort the whole run. The rest describe a mismatch between
    /// what the caller expected and what the program did.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RuntimeError::SpecError(_)
                | RuntimeError::InvalidOpcode { .. }
                | RuntimeError::InvalidParameterMode { .. }
                | RuntimeError::InvalidWriteMode { .. }
                | RuntimeError::NegativeAddress { .. }
                | RuntimeError::AddressOverflow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
