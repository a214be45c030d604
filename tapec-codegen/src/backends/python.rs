//! Python 3 backend

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn target(&self) -> Target {
        Target::Python
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = CodeWriter::exact("    ");

        w.line("#!/usr/bin/env python3");
        w.line(format!("# {}", config.program_name));
        w.line("import sys");
        w.blank();
        w.blank();
        w.line("def main():");
        w.indent();
        match config.tape_mode {
            TapeMode::Dynamic => w.line("tape = bytearray(1)"),
            TapeMode::Fixed => w.line(format!("tape = bytearray({})", config.tape_size)),
        }
        w.line("ptr = 0");
        if program.contains(Op::Input) {
            w.line("stdin = sys.stdin.buffer");
        }
        w.line("stdout = sys.stdout.buffer");
        emit_block(self, &mut w, program, config.tape_mode);
        w.line("stdout.flush()");
        w.dedent();
        w.blank();
        w.blank();
        w.line("if __name__ == \"__main__\":");
        w.indent();
        w.line("main()");
        w.dedent();

        w.finish()
    }
}

impl BlockSyntax for PythonEmitter {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("ptr += {}", amount));
            if mode == TapeMode::Dynamic {
                w.line("if ptr >= len(tape):");
                w.indent();
                w.line("tape.extend(bytes(ptr + 1 - len(tape)))");
                w.dedent();
            }
        } else {
            w.line(format!("ptr -= {}", -amount));
        }
    }

    fn add(&self, w: &mut CodeWriter, delta: i16) {
        if delta > 0 {
            w.line(format!("tape[ptr] = (tape[ptr] + {}) % 256", delta));
        } else {
            w.line(format!("tape[ptr] = (tape[ptr] - {}) % 256", -delta));
        }
    }

    fn output(&self, w: &mut CodeWriter) {
        w.line("stdout.write(tape[ptr:ptr + 1])");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("stdout.flush()");
        w.line("byte = stdin.read(1)");
        w.line("if byte:");
        w.indent();
        w.line("tape[ptr] = byte[0]");
        w.dedent();
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while tape[ptr]:");
    }

    fn loop_close(&self, _w: &mut CodeWriter) {}

    fn empty_body(&self, w: &mut CodeWriter) {
        w.line("pass");
    }
}
