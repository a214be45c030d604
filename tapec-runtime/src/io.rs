//! Byte-stream I/O for the machine

use std::collections::VecDeque;

/// Queued input bytes and collected output bytes
#[derive(Debug, Clone, Default)]
pub struct IoHandler {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl IoHandler {
    pub fn new(input: impl Into<VecDeque<u8>>) -> Self {
        Self {
            input: input.into(),
            output: Vec::new(),
        }
    }

    /// Next input byte, or `None` once the input is exhausted
    pub fn read(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    pub fn write(&mut self, byte: u8) {
        self.output.push(byte);
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}
