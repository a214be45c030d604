//! # Instruction Alphabet
//!
//! The eight source symbols and the six primitive operations that survive
//! into the IR. Loop delimiters never appear as [`Op`]s; the tree builder
//! consumes them structurally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every symbol the sanitizer keeps, in a fixed order
pub const SYMBOLS: [char; 8] = ['>', '<', '+', '-', '.', ',', '[', ']'];

/// One source instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// `>`: pointer += 1
    MoveRight,
    /// `<`: pointer -= 1
    MoveLeft,
    /// `+`: cell = cell + 1 (mod 256)
    Increment,
    /// `-`: cell = cell - 1 (mod 256)
    Decrement,
    /// `.`: write cell to stdout
    Output,
    /// `,`: read one byte from stdin into cell
    Input,
    /// `[`: loop start
    LoopStart,
    /// `]`: loop end
    LoopEnd,
}

impl Instruction {
    /// Decode a source character
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// Source character for this instruction
    pub const fn symbol(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Primitive (non-loop) operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
}

impl Op {
    /// All primitive operations
    pub const ALL: [Op; 6] = [
        Op::MoveRight,
        Op::MoveLeft,
        Op::Increment,
        Op::Decrement,
        Op::Output,
        Op::Input,
    ];

    /// The instruction this operation was decoded from
    pub const fn instruction(self) -> Instruction {
        match self {
            Op::MoveRight => Instruction::MoveRight,
            Op::MoveLeft => Instruction::MoveLeft,
            Op::Increment => Instruction::Increment,
            Op::Decrement => Instruction::Decrement,
            Op::Output => Instruction::Output,
            Op::Input => Instruction::Input,
        }
    }

    /// Source character
    #[inline]
    pub const fn symbol(self) -> char {
        self.instruction().symbol()
    }
}

impl TryFrom<Instruction> for Op {
    type Error = Instruction;

    /// Fails with the instruction itself for `[` and `]`
    fn try_from(instruction: Instruction) -> std::result::Result<Self, Self::Error> {
        match instruction {
            Instruction::MoveRight => Ok(Op::MoveRight),
            Instruction::MoveLeft => Ok(Op::MoveLeft),
            Instruction::Increment => Ok(Op::Increment),
            Instruction::Decrement => Ok(Op::Decrement),
            Instruction::Output => Ok(Op::Output),
            Instruction::Input => Ok(Op::Input),
            Instruction::LoopStart | Instruction::LoopEnd => Err(instruction),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
