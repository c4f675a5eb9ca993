//! Instruction execution for Intcode

use intcode_spec::{Address, Instruction, Opcode, ParamMode, Word};
use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{StepResult, VMState};

/// Raw operand word of parameter `index`
#[inline]
fn operand(state: &VMState, memory: &Memory, index: usize) -> Result<Word> {
    memory.read(state.offset_pc(1 + index as Address)?)
}

/// Value of a read parameter
fn read_param(instr: &Instruction, state: &VMState, memory: &Memory, index: usize) -> Result<Word> {
    let raw = operand(state, memory, index)?;
    match instr.mode(index) {
        ParamMode::Position => memory.read(raw),
        ParamMode::Immediate => Ok(raw),
        ParamMode::Relative => memory.read(state.relative_address(raw)?),
    }
}

/// Address targeted by a write parameter
fn write_address(instr: &Instruction, state: &VMState, memory: &Memory, index: usize) -> Result<Address> {
    let raw = operand(state, memory, index)?;
    match instr.mode(index) {
        ParamMode::Position => Ok(raw),
        ParamMode::Immediate => Err(RuntimeError::InvalidWriteMode { pc: state.pc }),
        ParamMode::Relative => state.relative_address(raw),
    }
}

/// Execute single instruction
///
/// `state.pc` must point at `instr`. On `NeededInput` nothing is modified.
pub fn execute(
    instr: &Instruction,
    state: &mut VMState,
    memory: &mut Memory,
    io: &mut IOHandler,
) -> Result<StepResult> {
    match instr.opcode {
        // ========== Arithmetic ==========
        Opcode::Add => {
            let a = read_param(instr, state, memory, 0)?;
            let b = read_param(instr, state, memory, 1)?;
            let dst = write_address(instr, state, memory, 2)?;
            memory.write(dst, a.wrapping_add(b))?;
            state.advance(instr.len())?;
        }

        Opcode::Mul => {
            let a = read_param(instr, state, memory, 0)?;
            let b = read_param(instr, state, memory, 1)?;
            let dst = write_address(instr, state, memory, 2)?;
            memory.write(dst, a.wrapping_mul(b))?;
            state.advance(instr.len())?;
        }

        // ========== I/O ==========
        Opcode::In => {
            let dst = write_address(instr, state, memory, 0)?;
            let Some(value) = io.read() else {
                return Ok(StepResult::NeededInput);
            };
            memory.write(dst, value)?;
            state.advance(instr.len())?;
        }

        Opcode::Out => {
            let value = read_param(instr, state, memory, 0)?;
            io.write(value);
            state.advance(instr.len())?;
            return Ok(StepResult::ProducedOutput(value));
        }

        // ========== Jumps ==========
        Opcode::Jt => {
            let cond = read_param(instr, state, memory, 0)?;
            let target = read_param(instr, state, memory, 1)?;
            if cond != 0 {
                state.pc = target;
            } else {
                state.advance(instr.len())?;
            }
        }

        Opcode::Jf => {
            let cond = read_param(instr, state, memory, 0)?;
            let target = read_param(instr, state, memory, 1)?;
            if cond == 0 {
                state.pc = target;
            } else {
                state.advance(instr.len())?;
            }
        }

        // ========== Compare ==========
        Opcode::Lt => {
            let a = read_param(instr, state, memory, 0)?;
            let b = read_param(instr, state, memory, 1)?;
            let dst = write_address(instr, state, memory, 2)?;
            memory.write(dst, (a < b) as Word)?;
            state.advance(instr.len())?;
        }

        Opcode::Eq => {
            let a = read_param(instr, state, memory, 0)?;
            let b = read_param(instr, state, memory, 1)?;
            let dst = write_address(instr, state, memory, 2)?;
            memory.write(dst, (a == b) as Word)?;
            state.advance(instr.len())?;
        }

        // ========== Relative base ==========
        Opcode::Arb => {
            let delta = read_param(instr, state, memory, 0)?;
            state.relative_base = state.relative_address(delta)?;
            state.advance(instr.len())?;
        }

        // ========== System ==========
        Opcode::Hlt => {
            state.halt();
            return Ok(StepResult::Halted);
        }
    }

    Ok(StepResult::Continued)
}
