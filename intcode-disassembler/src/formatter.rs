//! Instruction formatting to assembly text
//!
//! Operand syntax matches the assembler: bare numbers are positions, `#`
//! marks immediates and `@` marks relative offsets.

use intcode_spec::{Instruction, ParamMode, Word};

/// Format a single operand
pub fn format_operand(mode: ParamMode, raw: Word) -> String {
    format!("{}{}", mode.prefix(), raw)
}

/// Format instruction as assembly text
///
/// `operands` holds the raw parameter words; missing ones print as `?`.
pub fn format(instr: &Instruction, operands: &[Word]) -> String {
    let mnemonic = instr.opcode.mnemonic();
    let params: Vec<String> = (0..instr.param_count())
        .map(|i| match operands.get(i) {
            Some(&raw) => format_operand(instr.mode(i), raw),
            None => "?".to_string(),
        })
        .collect();

    if params.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, params.join(", "))
    }
}
