//! VM state for Intcode

use intcode_spec::{Address, Word};

use crate::error::{Result, RuntimeError};

/// Register state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VMState {
    /// Program counter
    pub pc: Address,

    /// Base added to relative-mode operands
    pub relative_base: Address,

    /// Executed instruction count
    pub cycles: u64,

    /// Halted flag
    pub halted: bool,
}

/// Outcome of a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// An instruction without externally visible effect ran
    Continued,
    /// An `out` instruction ran
    ProducedOutput(Word),
    /// An `in` instruction found the input queue empty; pc is unchanged
    NeededInput,
    /// The VM is halted
    Halted,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Halt execution
    pub fn halt(&mut self) {
        self.halted = true;
    }

    #[inline]
    pub fn inc_cycles(&mut self) {
        self.cycles += 1;
    }

    /// Move pc past an instruction of `len` words
    #[inline]
    pub fn advance(&mut self, len: usize) -> Result<()> {
        self.pc = self.offset_pc(len as Address)?;
        Ok(())
    }

    /// `pc + delta`, failing instead of wrapping
    #[inline]
    pub fn offset_pc(&self, delta: Address) -> Result<Address> {
        self.pc
            .checked_add(delta)
            .ok_or(RuntimeError::AddressOverflow { pc: self.pc })
    }

    /// `relative_base + offset`, failing instead of wrapping
    #[inline]
    pub fn relative_address(&self, offset: Word) -> Result<Address> {
        self.relative_base
            .checked_add(offset)
            .ok_or(RuntimeError::AddressOverflow { pc: self.pc })
    }
}
