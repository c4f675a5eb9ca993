//! # Intcode Opcode Definitions
//!
//! Opcodes occupy the two least significant decimal digits of an
//! instruction word. Each further digit, read right-to-left, selects the
//! addressing mode of parameter 1, 2 and 3.
//!
//! ## Opcode Table
//! - 1-2: Arithmetic (ADD, MUL)
//! - 3-4: I/O (IN, OUT)
//! - 5-6: Jumps (JT, JF)
//! - 7-8: Compare (LT, EQ)
//! - 9: Relative base adjustment (ARB)
//! - 99: Halt (HLT)

use serde::{Deserialize, Serialize};

use crate::error::IntcodeError;
use crate::Word;

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// ADD: mem[c] = a + b
    Add = 1,
    /// MUL: mem[c] = a * b
    Mul = 2,
    /// IN: mem[a] = next input
    In = 3,
    /// OUT: emit a
    Out = 4,
    /// JT: if a != 0 then pc = b
    Jt = 5,
    /// JF: if a == 0 then pc = b
    Jf = 6,
    /// LT: mem[c] = (a < b) ? 1 : 0
    Lt = 7,
    /// EQ: mem[c] = (a == b) ? 1 : 0
    Eq = 8,
    /// ARB: relative_base += a
    Arb = 9,
    /// HLT: stop execution
    Hlt = 99,
}

impl Opcode {
    /// Every opcode, in numeric order
    pub const ALL: [Opcode; 10] = [
        Opcode::Add,
        Opcode::Mul,
        Opcode::In,
        Opcode::Out,
        Opcode::Jt,
        Opcode::Jf,
        Opcode::Lt,
        Opcode::Eq,
        Opcode::Arb,
        Opcode::Hlt,
    ];

    /// Convert the two-digit opcode field to an `Opcode`
    pub fn from_word(value: Word) -> Result<Self, IntcodeError> {
        match value {
            1 => Ok(Opcode::Add),
            2 => Ok(Opcode::Mul),
            3 => Ok(Opcode::In),
            4 => Ok(Opcode::Out),
            5 => Ok(Opcode::Jt),
            6 => Ok(Opcode::Jf),
            7 => Ok(Opcode::Lt),
            8 => Ok(Opcode::Eq),
            9 => Ok(Opcode::Arb),
            99 => Ok(Opcode::Hlt),
            _ => Err(IntcodeError::InvalidOpcode(value)),
        }
    }

    /// Numeric value of the opcode field
    #[inline]
    pub const fn to_word(self) -> Word {
        self as u8 as Word
    }

    /// Number of parameters following the instruction word
    pub const fn param_count(self) -> usize {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::Lt | Opcode::Eq => 3,
            Opcode::Jt | Opcode::Jf => 2,
            Opcode::In | Opcode::Out | Opcode::Arb => 1,
            Opcode::Hlt => 0,
        }
    }

    /// Index of the parameter this opcode writes to, if any
    pub const fn write_param(self) -> Option<usize> {
        match self {
            Opcode::Add | Opcode::Mul | Opcode::Lt | Opcode::Eq => Some(2),
            Opcode::In => Some(0),
            _ => None,
        }
    }

    /// Total instruction length in words (instruction word + parameters)
    #[inline]
    pub const fn len(self) -> usize {
        1 + self.param_count()
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Mul => "mul",
            Opcode::In => "in",
            Opcode::Out => "out",
            Opcode::Jt => "jt",
            Opcode::Jf => "jf",
            Opcode::Lt => "lt",
            Opcode::Eq => "eq",
            Opcode::Arb => "arb",
            Opcode::Hlt => "hlt",
        }
    }

    /// Look up an opcode by mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Parameter addressing mode
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamMode {
    /// Operand is an address
    #[default]
    Position = 0,
    /// Operand is the value itself (read parameters only)
    Immediate = 1,
    /// Operand is an offset from the relative base
    Relative = 2,
}

impl ParamMode {
    /// Convert a single mode digit
    pub fn from_digit(digit: Word) -> Result<Self, IntcodeError> {
        match digit {
            0 => Ok(ParamMode::Position),
            1 => Ok(ParamMode::Immediate),
            2 => Ok(ParamMode::Relative),
            _ => Err(IntcodeError::InvalidParameterMode(digit)),
        }
    }

    /// Mode digit as stored in the instruction word
    #[inline]
    pub const fn to_digit(self) -> Word {
        self as u8 as Word
    }

    /// Operand prefix used in assembly text
    pub const fn prefix(self) -> &'static str {
        match self {
            ParamMode::Position => "",
            ParamMode::Immediate => "#",
            ParamMode::Relative => "@",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_word(op.to_word()).unwrap(), op);
        }
    }

    #[test]
    fn test_invalid_opcodes() {
        for value in [0, 10, 42, 98, 100, -1] {
            assert!(matches!(
                Opcode::from_word(value),
                Err(IntcodeError::InvalidOpcode(v)) if v == value
            ));
        }
    }

    #[test]
    fn test_param_counts() {
        assert_eq!(Opcode::Add.param_count(), 3);
        assert_eq!(Opcode::In.param_count(), 1);
        assert_eq!(Opcode::Jf.param_count(), 2);
        assert_eq!(Opcode::Hlt.param_count(), 0);
        assert_eq!(Opcode::Mul.len(), 4);
        assert_eq!(Opcode::Hlt.len(), 1);
    }

    #[test]
    fn test_write_params() {
        assert_eq!(Opcode::Add.write_param(), Some(2));
        assert_eq!(Opcode::In.write_param(), Some(0));
        assert_eq!(Opcode::Out.write_param(), None);
        assert_eq!(Opcode::Jt.write_param(), None);
    }

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(Opcode::from_mnemonic("ARB"), Some(Opcode::Arb));
        assert_eq!(Opcode::from_mnemonic("hlt"), Some(Opcode::Hlt));
        assert_eq!(Opcode::from_mnemonic("nop"), None);
        assert_eq!(Opcode::Eq.to_string(), "eq");
    }

    #[test]
    fn test_param_modes() {
        assert_eq!(ParamMode::from_digit(0).unwrap(), ParamMode::Position);
        assert_eq!(ParamMode::from_digit(1).unwrap(), ParamMode::Immediate);
        assert_eq!(ParamMode::from_digit(2).unwrap(), ParamMode::Relative);
        assert!(ParamMode::from_digit(3).is_err());
        assert_eq!(ParamMode::Relative.prefix(), "@");
    }
}
