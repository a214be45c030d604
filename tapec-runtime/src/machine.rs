//! Tape machine
//!
//! Walks the program tree directly, keeping open loops on an explicit stack. One step is one primitive operation or
//! one loop-condition test, so `+[-]` takes four steps.

use crate::error::{Result, RuntimeError};
use crate::io::IoHandler;
use crate::tape::Tape;
use tapec_ir::{ConfigError, Node, Op, Program, TapeMode, DEFAULT_TAPE_SIZE};
use tracing::debug;

/// Machine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum number of steps before giving up
    pub max_steps: u64,

    pub tape_mode: TapeMode,

    /// Cell count when `tape_mode` is fixed
    pub tape_size: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000_000,
            tape_mode: TapeMode::Dynamic,
            tape_size: DEFAULT_TAPE_SIZE,
        }
    }
}

impl MachineConfig {
    /// Fixed tape of `size` cells
    pub fn fixed(mut self, size: usize) -> Self {
        self.tape_mode = TapeMode::Fixed;
        self.tape_size = size;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tape_mode.is_fixed() && self.tape_size == 0 {
            return Err(ConfigError::ZeroTapeSize.into());
        }
        Ok(())
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Steps executed
    pub steps: u64,

    /// Bytes written by output operations
    pub output: Vec<u8>,

    /// Final pointer position
    pub pointer: usize,
}

impl ExecutionResult {
    /// Output decoded as UTF-8, with invalid sequences replaced
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Position within one nesting level
struct Frame<'a> {
    nodes: &'a [Node],
    index: usize,
}

pub struct Machine<'a> {
    program: &'a Program,
    tape: Tape,
    io: IoHandler,
    steps: u64,
    max_steps: u64,
}

impl<'a> Machine<'a> {
    pub fn new(program: &'a Program, input: Vec<u8>, config: MachineConfig) -> Result<Self> {
        config.validate()?;
        let tape = match config.tape_mode {
            TapeMode::Dynamic => Tape::dynamic(),
            TapeMode::Fixed => Tape::fixed(config.tape_size),
        };
        Ok(Self {
            program,
            tape,
            io: IoHandler::new(input),
            steps: 0,
            max_steps: config.max_steps,
        })
    }

    /// Run to completion
    pub fn run(mut self) -> Result<ExecutionResult> {
        let program = self.program;
        self.exec_block(program)?;

        debug!(
            steps = self.steps,
            output_len = self.io.output().len(),
            pointer = self.tape.pointer(),
            "machine halted"
        );

        Ok(ExecutionResult {
            steps: self.steps,
            pointer: self.tape.pointer(),
            output: self.io.into_output(),
        })
    }

    fn tick(&mut self) -> Result<()> {
        if self.steps >= self.max_steps {
            return Err(RuntimeError::StepLimitExceeded {
                limit: self.max_steps,
            });
        }
        self.steps += 1;
        Ok(())
    }

    fn exec_block(&mut self, program: &'a Program) -> Result<()> {
        let mut frames = vec![Frame {
            nodes: program.nodes(),
            index: 0,
        }];
        while let Some(frame) = frames.last_mut() {
            let nodes = frame.nodes;
            match nodes.get(frame.index) {
                None => {
                    // Back in the parent, which re-tests the same loop node.
                    frames.pop();
                }
                Some(Node::Primitive(op)) => {
                    frame.index += 1;
                    self.tick()?;
                    self.exec_op(*op)?;
                }
                Some(Node::Loop(body)) => {
                    self.tick()?;
                    if self.tape.get() == 0 {
                        frame.index += 1;
                    } else {
                        frames.push(Frame {
                            nodes: body.nodes(),
                            index: 0,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn exec_op(&mut self, op: Op) -> Result<()> {
        match op {
            Op::MoveRight => self.tape.move_right()?,
            Op::MoveLeft => {
                if !self.tape.move_left() {
                    return Err(RuntimeError::PointerUnderflow { step: self.steps });
                }
            }
            Op::Increment => self.tape.increment(),
            Op::Decrement => self.tape.decrement(),
            Op::Output => self.io.write(self.tape.get()),
            Op::Input => {
                // End of input leaves the cell as it was.
                if let Some(byte) = self.io.read() {
                    self.tape.set(byte);
                }
            }
        }
        Ok(())
    }
}
