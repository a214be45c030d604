//! Pascal backend (Free Pascal dialect)

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

pub struct PascalEmitter;

impl Emitter for PascalEmitter {
    fn target(&self) -> Target {
        Target::Pascal
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = CodeWriter::new("  ");

        w.line(format!("program {};", config.program_name));
        w.blank();
        w.line("var");
        w.indent();
        match config.tape_mode {
            TapeMode::Dynamic => w.line("tape: array of Byte;"),
            TapeMode::Fixed => w.line(format!(
                "tape: array[0..{}] of Byte;",
                config.tape_size.saturating_sub(1)
            )),
        }
        w.line("cursor: LongInt;");
        if program.contains(Op::Input) {
            w.line("inputChar: Char;");
        }
        w.dedent();
        w.blank();
        w.line("begin");
        w.indent();
        match config.tape_mode {
            TapeMode::Dynamic => w.line("SetLength(tape, 1);"),
            TapeMode::Fixed => w.line("FillChar(tape, SizeOf(tape), 0);"),
        }
        w.line("cursor := 0;");
        emit_block(self, &mut w, program, config.tape_mode);
        w.dedent();
        w.line("end.");

        w.finish()
    }
}

impl BlockSyntax for PascalEmitter {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("cursor := cursor + {};", amount));
            if mode == TapeMode::Dynamic {
                w.line("if cursor >= Length(tape) then SetLength(tape, 2 * cursor + 1);");
            }
        } else {
            w.line(format!("cursor := cursor - {};", -amount));
        }
    }

    fn add(&self, w: &mut CodeWriter, delta: i16) {
        if delta > 0 {
            w.line(format!(
                "tape[cursor] := (tape[cursor] + {}) mod 256;",
                delta
            ));
        } else {
            w.line(format!(
                "tape[cursor] := (tape[cursor] + {}) mod 256;",
                256 + delta
            ));
        }
    }

    fn output(&self, w: &mut CodeWriter) {
        w.line("Write(Chr(tape[cursor]));");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("if not Eof(Input) then");
        w.line("begin");
        w.indent();
        w.line("Read(inputChar);");
        w.line("tape[cursor] := Ord(inputChar);");
        w.dedent();
        w.line("end;");
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while tape[cursor] <> 0 do");
        w.line("begin");
    }

    fn loop_close(&self, w: &mut CodeWriter) {
        w.line("end;");
    }
}
