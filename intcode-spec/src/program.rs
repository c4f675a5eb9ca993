//! # Program Structure for Intcode
//!
//! A program is the initial memory image: word `i` is loaded at address `i`.
//! The binary format is a bincode-encoded word vector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IntcodeError, Result};
use crate::Word;

/// Complete program image
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Initial memory contents, starting at address 0
    pub code: Vec<Word>,
}

impl Program {
    /// Create a program from its memory image
    pub fn new(code: Vec<Word>) -> Self {
        Self { code }
    }

    /// Number of words in the image
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Memory image as a slice
    pub fn words(&self) -> &[Word] {
        &self.code
    }

    /// Validate the program
    ///
    /// Only emptiness is checked up front: code and data are interleaved, so
    /// individual words can only be judged when the VM reaches them.
    pub fn validate(&self) -> Result<()> {
        if self.code.is_empty() {
            return Err(IntcodeError::EmptyProgram);
        }
        Ok(())
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let program: Self = bincode::deserialize(bytes)?;
        program.validate()?;
        Ok(program)
    }
}

impl From<Vec<Word>> for Program {
    fn from(code: Vec<Word>) -> Self {
        Self::new(code)
    }
}

impl From<&[Word]> for Program {
    fn from(code: &[Word]) -> Self {
        Self::new(code.to_vec())
    }
}

impl FromIterator<Word> for Program {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.code.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
