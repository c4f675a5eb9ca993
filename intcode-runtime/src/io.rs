//! I/O handling
//!
//! Inputs and outputs are plain FIFO queues owned by the VM. Callers feed
//! the input queue and drain the output queue between steps.

use std::collections::VecDeque;

use intcode_spec::Word;

#[derive(Debug, Clone, Default)]
pub struct IOHandler {
    inputs: VecDeque<Word>,
    outputs: VecDeque<Word>,
}

impl IOHandler {
    pub fn new(inputs: Vec<Word>) -> Self {
        IOHandler {
            inputs: inputs.into(),
            outputs: VecDeque::new(),
        }
    }

    pub fn push_input(&mut self, value: Word) {
        self.inputs.push_back(value);
    }

    pub fn extend_inputs<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.inputs.extend(values);
    }

    pub fn read(&mut self) -> Option<Word> {
        self.inputs.pop_front()
    }

    pub fn write(&mut self, value: Word) {
        self.outputs.push_back(value);
    }

    pub fn pop_output(&mut self) -> Option<Word> {
        self.outputs.pop_front()
    }

    /// Remove the `count` oldest outputs
    pub fn drain_outputs(&mut self, count: usize) -> Vec<Word> {
        let count = count.min(self.outputs.len());
        self.outputs.drain(..count).collect()
    }

    pub fn output_len(&self) -> usize {
        self.outputs.len()
    }

    pub fn take_outputs(&mut self) -> Vec<Word> {
        std::mem::take(&mut self.outputs).into()
    }
}
