//! Two-pass assembler
//!
//! Pass one assigns an address to every label, pass two emits words with
//! labels resolved.

use std::collections::HashMap;

use intcode_spec::{Instruction, ParamMode, Program, Word, MAX_PARAMS};
use tracing::debug;

use crate::error::{AssemblerError, Result};
use crate::parser::{parse_source, Item, Value};

/// Assemble source text into a program
pub fn assemble(source: &str) -> Result<Program> {
    let items = parse_source(source)?;
    let labels = collect_labels(&items)?;

    let mut code = Vec::with_capacity(items.iter().map(Item::size).sum());
    for item in &items {
        match item {
            Item::Label { .. } => {}
            Item::Instruction { opcode, operands, .. } => {
                let mut modes = [ParamMode::Position; MAX_PARAMS];
                for (slot, operand) in modes.iter_mut().zip(operands) {
                    *slot = operand.mode;
                }
                code.push(Instruction::with_modes(*opcode, modes).encode());
                for operand in operands {
                    code.push(resolve(&operand.value, &labels)?);
                }
            }
            Item::Data { values, .. } => {
                for value in values {
                    code.push(resolve(value, &labels)?);
                }
            }
        }
    }

    debug!(words = code.len(), labels = labels.len(), "assembled program");
    Ok(Program::new(code))
}

fn collect_labels(items: &[Item]) -> Result<HashMap<String, Word>> {
    let mut labels = HashMap::new();
    let mut address: Word = 0;
    for item in items {
        if let Item::Label { name, .. } = item {
            if labels.insert(name.clone(), address).is_some() {
                return Err(AssemblerError::DuplicateLabel(name.clone()));
            }
        }
        address += item.size() as Word;
    }
    Ok(labels)
}

fn resolve(value: &Value, labels: &HashMap<String, Word>) -> Result<Word> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Label(name) => labels
            .get(name)
            .copied()
            .ok_or_else(|| AssemblerError::UndefinedLabel(name.clone())),
    }
}
