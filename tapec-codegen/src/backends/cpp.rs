//! C++ backend

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

const GROW: &str = "\
void grow()
{
    if (ptr >= tape.size()) {
        tape.resize(ptr + 1 + tape.size(), 0);
    }
}";

const READ_CELL: &str = "\
void read_cell()
{
    int c = std::getchar();
    if (c != EOF) {
        tape[ptr] = static_cast<unsigned char>(c);
    }
}";

pub struct CppEmitter;

impl Emitter for CppEmitter {
    fn target(&self) -> Target {
        Target::Cpp
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = CodeWriter::new("    ");

        w.line(format!("// {}", config.program_name));
        match config.tape_mode {
            TapeMode::Dynamic => {
                w.line("#include <cstddef>");
                w.line("#include <cstdio>");
                w.line("#include <vector>");
            }
            TapeMode::Fixed => {
                w.line("#include <array>");
                w.line("#include <cstddef>");
                w.line("#include <cstdio>");
            }
        }
        w.blank();
        w.line("namespace {");
        w.blank();
        match config.tape_mode {
            TapeMode::Dynamic => w.line("std::vector<unsigned char> tape(1, 0);"),
            TapeMode::Fixed => w.line(format!(
                "std::array<unsigned char, {}> tape{{}};",
                config.tape_size
            )),
        }
        w.line("std::size_t ptr = 0;");

        if config.tape_mode == TapeMode::Dynamic && program.contains(Op::MoveRight) {
            w.blank();
            w.lines(GROW);
        }
        if program.contains(Op::Input) {
            w.blank();
            w.lines(READ_CELL);
        }

        w.blank();
        w.line("}  // namespace");
        w.blank();
        w.line("int main()");
        w.line("{");
        w.indent();
        emit_block(self, &mut w, program, config.tape_mode);
        w.line("return 0;");
        w.dedent();
        w.line("}");

        w.finish()
    }
}

impl BlockSyntax for CppEmitter {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("ptr += {};", amount));
            if mode == TapeMode::Dynamic {
                w.line("grow();");
            }
        } else {
            w.line(format!("ptr -= {};", -amount));
        }
    }

    fn add(&self, w: &mut CodeWriter, delta: i16) {
        if delta > 0 {
            w.line(format!("tape[ptr] += {};", delta));
        } else {
            w.line(format!("tape[ptr] -= {};", -delta));
        }
    }

    fn output(&self, w: &mut CodeWriter) {
        w.line("std::putchar(tape[ptr]);");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("read_cell();");
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while (tape[ptr] != 0) {");
    }

    fn loop_close(&self, w: &mut CodeWriter) {
        w.line("}");
    }
}
