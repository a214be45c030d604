//! # Tape Machine IR
//!
//! Shared intermediate representation for the tape-machine compiler.
//!
//! ## Key Features
//! - Eight-symbol instruction alphabet (`> < + - . , [ ]`)
//! - Six primitive operations; loops are recovered structurally
//! - Recursive [`Program`] tree: a sequence of primitives and loop nodes
//! - [`EmitterConfig`] shared by every backend (program name, tape model)
//!
//! ## Example
//!
//! ```rust
//! use tapec_ir::{Node, Op, Program};
//!
//! let program = Program::new(vec![
//!     Node::Primitive(Op::Increment),
//!     Node::Loop(Program::new(vec![Node::Primitive(Op::Decrement)])),
//! ]);
//!
//! assert_eq!(program.flatten(), "+[-]");
//! assert_eq!(program.depth(), 1);
//! ```

pub mod op;
pub mod program;
pub mod config;
pub mod error;

pub use op::{Instruction, Op, SYMBOLS};
pub use program::{Instructions, Node, Program};
pub use config::{
    is_reserved, ConfigError, EmitterConfig, TapeMode, DEFAULT_PROGRAM_NAME, DEFAULT_TAPE_SIZE,
    RESERVED_NAMES,
};
pub use error::{IrError, Result};

/// Cell width in bits; all cell arithmetic wraps modulo `CELL_MODULUS`
pub const CELL_BITS: u32 = 8;

/// Number of distinct cell values (255 + 1 wraps to 0)
pub const CELL_MODULUS: u16 = 1 << CELL_BITS;
