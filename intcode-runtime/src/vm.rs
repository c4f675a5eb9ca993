//! Virtual Machine for Intcode

use intcode_spec::{Address, Instruction, IntcodeError, Program, Word};
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{StepResult, VMState};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Abort with `CycleLimitExceeded` after this many instructions
    pub max_cycles: Option<u64>,

    /// Log every executed instruction at trace level
    pub trace: bool,
}

impl VMConfig {
    pub fn with_max_cycles(mut self, limit: u64) -> Self {
        self.max_cycles = Some(limit);
        self
    }

    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Outputs not yet consumed by the caller
    pub outputs: Vec<Word>,
}

/// Intcode Virtual Machine
///
/// The VM never blocks: `step` returns at every output and at every input
/// request it cannot satisfy, and the caller decides how to continue.
///
/// `Clone` forks the machine. Memory pages are shared copy-on-write, so a
/// fork is cheap, and no write, queue change or register update made on one
/// side is ever visible on the other.
#[derive(Debug, Clone)]
pub struct VM {
    /// VM state (pc, relative base, etc.)
    state: VMState,

    /// Memory subsystem
    memory: Memory,

    /// I/O queues
    io: IOHandler,

    /// Configuration
    config: VMConfig,
}

impl VM {
    /// Create a new VM with a program and seed inputs
    pub fn new(program: &Program, inputs: Vec<Word>, config: VMConfig) -> Self {
        Self {
            state: VMState::new(),
            memory: Memory::from_words(program.words()),
            io: IOHandler::new(inputs),
            config,
        }
    }

    /// Append a value to the input queue
    pub fn push_input(&mut self, value: Word) {
        self.io.push_input(value);
    }

    pub fn extend_inputs<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.io.extend_inputs(values);
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<StepResult> {
        if self.state.is_halted() {
            return Ok(StepResult::Halted);
        }

        // Check cycle limit
        if let Some(limit) = self.config.max_cycles {
            if self.state.cycles >= limit {
                return Err(RuntimeError::CycleLimitExceeded { limit });
            }
        }

        let inst = self.fetch_and_decode()?;

        if self.config.trace {
            let operands = self
                .memory
                .dump(self.state.offset_pc(1)?..self.state.offset_pc(inst.len() as Address)?)?;
            tracing::trace!(
                cycle = self.state.cycles,
                pc = self.state.pc,
                "{}",
                intcode_disassembler::format(&inst, &operands)
            );
        }

        let result = execute(&inst, &mut self.state, &mut self.memory, &mut self.io)?;

        match result {
            StepResult::NeededInput => {
                tracing::trace!(pc = self.state.pc, "suspended waiting for input");
            }
            StepResult::Halted => {
                self.state.inc_cycles();
                tracing::debug!(cycles = self.state.cycles, pc = self.state.pc, "halted");
            }
            StepResult::Continued | StepResult::ProducedOutput(_) => {
                self.state.inc_cycles();
            }
        }

        Ok(result)
    }

    /// Step until `count` outputs are available and return them in order
    ///
    /// Fails with `UnexpectedHalt` if the program halts first, and with
    /// `InputRequired` if it asks for input the queue cannot supply. Outputs
    /// produced before the failure stay queued.
    pub fn run_until_outputs(&mut self, count: usize) -> Result<Vec<Word>> {
        while self.io.output_len() < count {
            match self.step()? {
                StepResult::Halted => {
                    return Err(RuntimeError::UnexpectedHalt {
                        expected: count,
                        produced: self.io.output_len(),
                    });
                }
                StepResult::NeededInput => {
                    return Err(RuntimeError::InputRequired { pc: self.state.pc });
                }
                StepResult::Continued | StepResult::ProducedOutput(_) => {}
            }
        }
        Ok(self.io.drain_outputs(count))
    }

    /// Step until one output is available, or `None` once halted
    pub fn next_output(&mut self) -> Result<Option<Word>> {
        loop {
            if let Some(value) = self.io.pop_output() {
                return Ok(Some(value));
            }
            match self.step()? {
                StepResult::Halted => return Ok(None),
                StepResult::NeededInput => {
                    return Err(RuntimeError::InputRequired { pc: self.state.pc });
                }
                StepResult::Continued | StepResult::ProducedOutput(_) => {}
            }
        }
    }

    /// Run until the VM waits for input or halts
    ///
    /// Returns `NeededInput` or `Halted`; outputs accumulate in the queue.
    pub fn resume(&mut self) -> Result<StepResult> {
        loop {
            match self.step()? {
                result @ (StepResult::NeededInput | StepResult::Halted) => return Ok(result),
                StepResult::Continued | StepResult::ProducedOutput(_) => {}
            }
        }
    }

    /// Run the VM until halt
    pub fn run(&mut self) -> Result<ExecutionResult> {
        if self.resume()? == StepResult::NeededInput {
            return Err(RuntimeError::InputRequired { pc: self.state.pc });
        }

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: self.io.take_outputs(),
        })
    }

    /// Fetch and decode instruction at pc
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.pc;
        let word = self.memory.read(pc)?;

        Instruction::decode(word).map_err(|e| match e {
            IntcodeError::InvalidOpcode(_) | IntcodeError::InvalidEncoding(_) => {
                RuntimeError::InvalidOpcode { pc, opcode: word }
            }
            IntcodeError::InvalidParameterMode(mode) => {
                RuntimeError::InvalidParameterMode { pc, mode }
            }
            other => RuntimeError::SpecError(other),
        })
    }

    pub fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    /// Number of queued, unconsumed outputs
    pub fn pending_outputs(&self) -> usize {
        self.io.output_len()
    }

    /// Drain all queued outputs
    pub fn take_outputs(&mut self) -> Vec<Word> {
        self.io.take_outputs()
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable memory, for patching a program before it runs
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn config(&self) -> &VMConfig {
        &self.config
    }
}
