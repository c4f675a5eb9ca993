//! # Error Types for Intcode

use thiserror::Error;

use crate::Word;

#[derive(Debug, Error)]
pub enum IntcodeError {
    // Instruction errors
    #[error("Invalid opcode: {0}")]
    InvalidOpcode(Word),

    #[error("Invalid parameter mode: {0} (valid modes: 0-2)")]
    InvalidParameterMode(Word),

    #[error("Invalid instruction encoding: {0}")]
    InvalidEncoding(Word),

    // Program format errors
    #[error("Program serialization failed: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Empty program")]
    EmptyProgram,
}

impl IntcodeError {
    /// Check if this error describes a malformed instruction
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            IntcodeError::InvalidOpcode(_)
                | IntcodeError::InvalidParameterMode(_)
                | IntcodeError::InvalidEncoding(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IntcodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntcodeError::InvalidOpcode(42);
        assert_eq!(err.to_string(), "Invalid opcode: 42");

        let err = IntcodeError::InvalidParameterMode(7);
        assert_eq!(err.to_string(), "Invalid parameter mode: 7 (valid modes: 0-2)");

        let err = IntcodeError::EmptyProgram;
        assert_eq!(err.to_string(), "Empty program");
    }

    #[test]
    fn test_is_decode_error() {
        assert!(IntcodeError::InvalidOpcode(0).is_decode_error());
        assert!(IntcodeError::InvalidEncoding(-5).is_decode_error());
        assert!(!IntcodeError::EmptyProgram.is_decode_error());
        assert!(!IntcodeError::EmptyProgram.is_decode_error());
    }
}
