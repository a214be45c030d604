//! # Tape Machine Code Generation
//!
//! Translates a [`Program`](tapec_ir::Program) into complete source units
//! for ten target languages.
//!
//! ## Architecture
//!
//! ```text
//! source ──► tapec_frontend::parse ──► Program ──► Target::emitter() ──► String
//!                                                   │
//!                    ┌──────────────┬───────────────┼──────────────┐
//!                    ▼              ▼               ▼              ▼
//!               C / C++ / Rust   Python / Pascal   QBasic       JavaScript
//!               (BlockSyntax)    (BlockSyntax)     (GOTO)       (4 hosts)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tapec_codegen::{compile, Target};
//! use tapec_ir::EmitterConfig;
//!
//! let config = EmitterConfig::new().fixed(1024);
//! let code = compile(Target::C, ",.", Some(&config)).unwrap();
//! assert!(code.contains("#define TAPE_SIZE 1024"));
//! ```

pub mod backends;
pub mod compile;
pub mod emitter;
pub mod error;
pub mod fold;
pub mod labels;
pub mod target;
pub mod writer;

pub use compile::{
    compile, compile_to_c, compile_to_cpp, compile_to_js_base, compile_to_js_cli,
    compile_to_js_deno, compile_to_js_node, compile_to_js_web, compile_to_pascal,
    compile_to_python, compile_to_qbasic, compile_to_rust, emit,
};
pub use emitter::Emitter;
pub use error::{CodegenError, Result};
pub use target::Target;
