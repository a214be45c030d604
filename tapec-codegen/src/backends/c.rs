//! C backend
//!
//! Dynamic tapes live on the heap and double in size whenever the pointer
//! runs past the end; fixed tapes are a static array.

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

const DYNAMIC_TAPE: &str = "\
static unsigned char *tape = NULL;
static size_t tape_len = 0;
static size_t ptr = 0;

static void ensure(size_t index)
{
    size_t len = tape_len ? tape_len : 1024;
    unsigned char *grown;

    if (index < tape_len)
        return;
    while (len <= index)
        len *= 2;
    grown = realloc(tape, len);
    if (grown == NULL) {
        fputs(\"out of memory\\n\", stderr);
        exit(1);
    }
    memset(grown + tape_len, 0, len - tape_len);
    tape = grown;
    tape_len = len;
}";

const READ_CELL: &str = "\
static void read_cell(void)
{
    int c = getchar();

    if (c != EOF)
        tape[ptr] = (unsigned char)c;
}";

pub struct CEmitter;

impl Emitter for CEmitter {
    fn target(&self) -> Target {
        Target::C
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = CodeWriter::new("    ");

        w.line(format!("/* {} */", config.program_name));
        w.line("#include <stdio.h>");
        if config.tape_mode == TapeMode::Dynamic {
            w.line("#include <stdlib.h>");
            w.line("#include <string.h>");
        }
        w.blank();

        match config.tape_mode {
            TapeMode::Dynamic => w.lines(DYNAMIC_TAPE),
            TapeMode::Fixed => {
                w.line(format!("#define TAPE_SIZE {}", config.tape_size));
                w.blank();
                w.line("static unsigned char tape[TAPE_SIZE];");
                w.line("static size_t ptr = 0;");
            }
        }

        if program.contains(Op::Input) {
            w.blank();
            w.lines(READ_CELL);
        }

        w.blank();
        w.line("int main(void)");
        w.line("{");
        w.indent();
        if config.tape_mode == TapeMode::Dynamic {
            w.line("ensure(0);");
        }
        emit_block(self, &mut w, program, config.tape_mode);
        if config.tape_mode == TapeMode::Dynamic {
            w.line("free(tape);");
        }
        w.line("return 0;");
        w.dedent();
        w.line("}");

        w.finish()
    }
}

impl BlockSyntax for CEmitter {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("ptr += {};", amount));
            if mode == TapeMode::Dynamic {
                w.line("ensure(ptr);");
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
        w.line("putchar(tape[ptr]);");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("read_cell();");
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while (tape[ptr]) {");
    }

    fn loop_close(&self, w: &mut CodeWriter) {
        w.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapec_ir::Node;

    fn echo() -> Program {
        Program::new(vec![Node::Primitive(Op::Input), Node::Primitive(Op::Output)])
    }

    #[test]
    fn test_emit_echo_dynamic() {
        let code = CEmitter.emit(&echo(), &EmitterConfig::default());
        assert!(code.contains("#include <stdlib.h>"));
        assert!(code.contains("static void ensure(size_t index)"));
        assert!(code.contains("static void read_cell(void)"));
        assert!(code.contains("    read_cell();\n    putchar(tape[ptr]);\n"));
        assert!(code.ends_with("    free(tape);\n    return 0;\n}\n"));
    }

    #[test]
    fn test_emit_fixed() {
        let code = CEmitter.emit(&echo(), &EmitterConfig::new().fixed(64));
        assert!(code.contains("#define TAPE_SIZE 64"));
        assert!(code.contains("static unsigned char tape[TAPE_SIZE];"));
        assert!(!code.contains("ensure"));
        assert!(!code.contains("free(tape)"));
    }

    #[test]
    fn test_no_input_helper_without_input() {
        let program = Program::new(vec![Node::Primitive(Op::Output)]);
        let code = CEmitter.emit(&program, &EmitterConfig::default());
        assert!(!code.contains("read_cell"));
    }

    #[test]
    fn test_folded_statements() {
        let program = tapec_frontend::parse("+++>>--<").unwrap();
        let code = CEmitter.emit(&program, &EmitterConfig::default());
        assert!(code.contains(
            "    tape[ptr] += 3;\n    ptr += 2;\n    ensure(ptr);\n    tape[ptr] -= 2;\n    ptr -= 1;\n"
        ));
    }

    #[test]
    fn test_loop() {
        let program = Program::new(vec![Node::looped(vec![Node::Primitive(Op::Decrement)])]);
        let code = CEmitter.emit(&program, &EmitterConfig::default());
        assert!(code.contains("    while (tape[ptr]) {\n        tape[ptr] -= 1;\n    }\n"));
    }
}
