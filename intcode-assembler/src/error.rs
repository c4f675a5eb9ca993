//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown instruction at line {line}: {name}")]
    UnknownInstruction { line: usize, name: String },

    #[error("Wrong operand count at line {line}: {mnemonic} takes {expected}, found {found}")]
    OperandCount {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Immediate-mode write target at line {line}")]
    ImmediateWriteTarget { line: usize },

    #[error("Undefined label: {0}")]
    UndefinedLabel(String),

    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid directive: {0}")]
    InvalidDirective(String),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
