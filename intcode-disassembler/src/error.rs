//! Disassembler errors

use thiserror::Error;
use intcode_spec::{Address, IntcodeError, Word};

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode in word {0}")]
    UnknownOpcode(Word),

    #[error("Invalid parameter mode in word {word}")]
    InvalidMode { word: Word },

    #[error("Instruction at address {address} runs past the end of the program")]
    Truncated { address: Address },

    #[error("Spec error: {0}")]
    Spec(IntcodeError),
}

impl DisassemblerError {
    /// Classify a decode failure of `word`
    pub fn from_decode(word: Word, err: IntcodeError) -> Self {
        match err {
            IntcodeError::InvalidOpcode(_) | IntcodeError::InvalidEncoding(_) => {
                DisassemblerError::UnknownOpcode(word)
            }
            IntcodeError::InvalidParameterMode(_) => DisassemblerError::InvalidMode { word },
            other => DisassemblerError::Spec(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
