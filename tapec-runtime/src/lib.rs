//! # Tape Machine Runtime
//!
//! Reference interpreter for the tape machine. It executes a
//! [`Program`](tapec_ir::Program) in-process with byte-oriented I/O and is
//! the semantic yardstick for the generated code.
//!
//! - **Cells**: wrapping 8-bit values, zero-initialised
//! - **Tape**: dynamic (grows to the right) or fixed size
//! - **Input**: queued bytes; end of input leaves the cell unchanged
//!
//! ## Example
//!
//! ```rust
//! use tapec_runtime::run;
//!
//! let program = tapec_frontend::parse(",+.").unwrap();
//! assert_eq!(run(&program, b"a").unwrap(), b"b");
//! ```

pub mod error;
pub mod io;
pub mod machine;
pub mod tape;

pub use error::{Result, RuntimeError};
pub use io::IoHandler;
pub use machine::{ExecutionResult, Machine, MachineConfig};
pub use tape::Tape;

use tapec_ir::Program;

/// Run `program` on `input` with the default configuration and return its output
pub fn run(program: &Program, input: &[u8]) -> Result<Vec<u8>> {
    let machine = Machine::new(program, input.to_vec(), MachineConfig::default())?;
    Ok(machine.run()?.output)
}
