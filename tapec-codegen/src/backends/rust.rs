//! Rust backend
//!
//! The generated program only touches `std` and propagates I/O errors out
//! of `main`.

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = CodeWriter::new("    ");

        w.line(format!("// {}", config.program_name));
        w.line("#![allow(unused_mut, unused_variables, unused_imports)]");
        w.blank();
        w.line("use std::io::{self, Read, Write};");
        w.blank();
        w.line("fn main() -> io::Result<()> {");
        w.indent();
        match config.tape_mode {
            TapeMode::Dynamic => w.line("let mut tape: Vec<u8> = vec![0; 1];"),
            TapeMode::Fixed => w.line(format!(
                "let mut tape: Vec<u8> = vec![0u8; {}];",
                config.tape_size
            )),
        }
        w.line("let mut ptr: usize = 0;");
        w.line("let mut stdin = io::stdin().lock();");
        w.line("let mut stdout = io::stdout().lock();");
        if program.contains(Op::Input) {
            w.line("let mut byte = [0u8; 1];");
        }
        w.blank();
        emit_block(self, &mut w, program, config.tape_mode);
        w.line("stdout.flush()?;");
        w.line("Ok(())");
        w.dedent();
        w.line("}");

        w.finish()
    }
}

impl BlockSyntax for RustEmitter {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("ptr += {};", amount));
            if mode == TapeMode::Dynamic {
                w.line("if ptr >= tape.len() {");
                w.indent();
                w.line("tape.resize(ptr + 1, 0);");
                w.dedent();
                w.line("}");
            }
        } else {
            w.line(format!("ptr -= {};", -amount));
        }
    }

    fn add(&self, w: &mut CodeWriter, delta: i16) {
        if delta > 0 {
            w.line(format!("tape[ptr] = tape[ptr].wrapping_add({});", delta));
        } else {
            w.line(format!("tape[ptr] = tape[ptr].wrapping_sub({});", -delta));
        }
    }

    fn output(&self, w: &mut CodeWriter) {
        w.line("stdout.write_all(&[tape[ptr]])?;");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("stdout.flush()?;");
        w.line("if stdin.read(&mut byte)? == 1 {");
        w.indent();
        w.line("tape[ptr] = byte[0];");
        w.dedent();
        w.line("}");
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while tape[ptr] != 0 {");
    }

    fn loop_close(&self, w: &mut CodeWriter) {
        w.line("}");
    }
}
