//! Main disassembler logic

use intcode_spec::{Address, Instruction, Program, Word};
use crate::error::{DisassemblerError, Result};
use crate::formatter::format;

/// One decoded instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembled {
    pub address: Address,
    pub instruction: Instruction,
    pub operands: Vec<Word>,
    pub text: String,
}

impl Disassembled {
    /// Words covered by this instruction
    pub fn len(&self) -> usize {
        self.instruction.len()
    }
}

/// Decode the instruction starting at `address`
pub fn disassemble_at(words: &[Word], address: Address) -> Result<Disassembled> {
    let start = usize::try_from(address)
        .ok()
        .filter(|&start| start < words.len())
        .ok_or(DisassemblerError::Truncated { address })?;

    let word = words[start];
    let instruction =
        Instruction::decode(word).map_err(|e| DisassemblerError::from_decode(word, e))?;

    let end = start + instruction.len();
    if end > words.len() {
        return Err(DisassemblerError::Truncated { address });
    }

    let operands = words[start + 1..end].to_vec();
    let text = format(&instruction, &operands);

    Ok(Disassembled {
        address,
        instruction,
        operands,
        text,
    })
}

/// Disassemble a program into assembly text
pub fn disassemble(program: &Program) -> String {
    let words = program.words();
    let mut output = String::new();

    output.push_str("; Intcode disassembly\n");
    output.push_str(&format!("; Size: {} words\n", words.len()));
    output.push('\n');

    let mut address = 0usize;
    while address < words.len() {
        output.push_str(&format!("{:>6}:  ", address));

        match disassemble_at(words, address as Address) {
            Ok(decoded) => {
                output.push_str(&decoded.text);
                address += decoded.len();
            }
            Err(_) => {
                output.push_str(&format!(".data {}", words[address]));
                address += 1;
            }
        }

        output.push('\n');
    }

    output
}
