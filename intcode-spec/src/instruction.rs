//! # Instruction Decoding
//!
//! An instruction word packs the opcode and the parameter modes in decimal:
//!
//! ```text
//!   ABCDE
//!    1002
//!
//!   DE - two-digit opcode      02 == mul
//!    C - mode of 1st param      0 == position
//!    B - mode of 2nd param      1 == immediate
//!    A - mode of 3rd param      0 == position (omitted leading zero)
//! ```
//!
//! The operands themselves live in the words that follow; decoding only
//! looks at the instruction word.

use serde::{Deserialize, Serialize};

use crate::error::{IntcodeError, Result};
use crate::opcode::{Opcode, ParamMode};
use crate::{Word, MAX_PARAMS, OPCODE_RADIX};

/// Decoded instruction word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation
    pub opcode: Opcode,
    /// Addressing mode of each parameter, in parameter order
    pub modes: [ParamMode; MAX_PARAMS],
}

impl Instruction {
    /// Instruction with every parameter in position mode
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            modes: [ParamMode::Position; MAX_PARAMS],
        }
    }

    /// Instruction with explicit parameter modes
    pub const fn with_modes(opcode: Opcode, modes: [ParamMode; MAX_PARAMS]) -> Self {
        Self { opcode, modes }
    }

    /// Decode an instruction word
    pub fn decode(word: Word) -> Result<Self> {
        if word < 0 {
            return Err(IntcodeError::InvalidOpcode(word));
        }

        let opcode = Opcode::from_word(word % OPCODE_RADIX)?;

        let mut digits = word / OPCODE_RADIX;
        let mut modes = [ParamMode::Position; MAX_PARAMS];
        for mode in modes.iter_mut() {
            *mode = ParamMode::from_digit(digits % 10)?;
            digits /= 10;
        }

        if digits != 0 {
            return Err(IntcodeError::InvalidEncoding(word));
        }

        Ok(Self { opcode, modes })
    }

    /// Encode back into an instruction word
    ///
    /// Modes of parameters the opcode does not take are dropped, so
    /// `decode(encode(i))` may normalize them to position mode.
    pub fn encode(&self) -> Word {
        let mut word = self.opcode.to_word();
        let mut scale = OPCODE_RADIX;
        for mode in self.modes.iter().take(self.opcode.param_count()) {
            word += mode.to_digit() * scale;
            scale *= 10;
        }
        word
    }

    /// Mode of parameter `index` (0-based)
    #[inline]
    pub fn mode(&self, index: usize) -> ParamMode {
        self.modes[index]
    }

    /// Number of parameters
    #[inline]
    pub fn param_count(&self) -> usize {
        self.opcode.param_count()
    }

    /// Instruction length in words
    #[inline]
    pub fn len(&self) -> usize {
        self.opcode.len()
    }

    /// Whether the instruction would write through an immediate-mode parameter
    pub fn has_immediate_write(&self) -> bool {
        self.opcode
            .write_param()
            .is_some_and(|index| self.modes[index] == ParamMode::Immediate)
    }
}
