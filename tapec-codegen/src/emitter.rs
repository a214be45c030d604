//! # Emitter Interface
//!
//! Every backend is a pure function from `(Program, EmitterConfig)` to
//! source text. Backends with a native while-loop implement [`BlockSyntax`]
//! and let [`emit_block`] walk the tree; goto-based backends walk it
//! themselves.

use crate::fold::{fold, Step};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Program, TapeMode};

/// Translator from IR to one target language
pub trait Emitter: Send + Sync {
    /// Language this emitter produces
    fn target(&self) -> Target;

    /// Generate a complete compilation unit
    ///
    /// Deterministic: the same program and configuration always produce the
    /// same bytes.
    fn emit(&self, program: &Program, config: &EmitterConfig) -> String;
}

/// Statement-level syntax of a target with structured loops
pub(crate) trait BlockSyntax {
    /// Move the pointer by `amount` (nonzero, positive is right)
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode);

    /// Add `delta` (nonzero, -255..=255) to the current cell, wrapping mod 256
    fn add(&self, w: &mut CodeWriter, delta: i16);

    fn output(&self, w: &mut CodeWriter);

    /// Read one byte into the current cell; leave it unchanged at end of input
    fn input(&self, w: &mut CodeWriter);

    /// Loop header; the walker indents the body
    fn loop_open(&self, w: &mut CodeWriter);

    fn loop_close(&self, w: &mut CodeWriter);

    /// Filler for targets that cannot express an empty block
    fn empty_body(&self, _w: &mut CodeWriter) {}
}

/// Emit `program` through `syntax`, walking nested loops with an explicit stack
pub(crate) fn emit_block<S: BlockSyntax + ?Sized>(
    syntax: &S,
    w: &mut CodeWriter,
    program: &Program,
    mode: TapeMode,
) {
    let mut stack = vec![fold(program).into_iter()];
    while let Some(level) = stack.last_mut() {
        let step = match level.next() {
            Some(step) => step,
            None => {
                stack.pop();
                if !stack.is_empty() {
                    w.dedent();
                    syntax.loop_close(w);
                }
                continue;
            }
        };
        match step {
            Step::Move(amount) => syntax.move_pointer(w, amount, mode),
            Step::Add(delta) => syntax.add(w, delta),
            Step::Output => syntax.output(w),
            Step::Input => syntax.input(w),
            Step::Loop(body) => {
                syntax.loop_open(w);
                w.indent();
                let steps = fold(body);
                if steps.is_empty() {
                    syntax.empty_body(w);
                }
                stack.push(steps.into_iter());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapec_ir::{Node, Op};

    /// Records steps in a compact notation
    struct Trace;

    impl BlockSyntax for Trace {
        fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
            w.line(format!("move {} {}", amount, mode));
        }
        fn add(&self, w: &mut CodeWriter, delta: i16) {
            w.line(format!("add {}", delta));
        }
        fn output(&self, w: &mut CodeWriter) {
            w.line("out");
        }
        fn input(&self, w: &mut CodeWriter) {
            w.line("in");
        }
        fn loop_open(&self, w: &mut CodeWriter) {
            w.line("while {");
        }
        fn loop_close(&self, w: &mut CodeWriter) {
            w.line("}");
        }
        fn empty_body(&self, w: &mut CodeWriter) {
            w.line("pass");
        }
    }

    #[test]
    fn test_walk_nested() {
        let program = Program::new(vec![
            Node::Primitive(Op::Increment),
            Node::Primitive(Op::Increment),
            Node::looped(vec![
                Node::Primitive(Op::MoveRight),
                Node::Primitive(Op::Output),
                Node::looped(vec![]),
            ]),
            Node::Primitive(Op::Input),
        ]);

        let mut w = CodeWriter::new("  ");
        emit_block(&Trace, &mut w, &program, TapeMode::Fixed);
        assert_eq!(
            w.finish(),
            "add 2\nwhile {\n  move 1 fixed\n  out\n  while {\n    pass\n  }\n}\nin\n"
        );
    }

    #[test]
    fn test_cancelled_body_is_empty() {
        let body: Vec<Node> = std::iter::repeat(Node::Primitive(Op::Decrement)).take(256).collect();
        let program = Program::new(vec![Node::looped(body)]);

        let mut w = CodeWriter::new("  ");
        emit_block(&Trace, &mut w, &program, TapeMode::Dynamic);
        assert_eq!(w.finish(), "while {\n  pass\n}\n");
    }

    #[test]
    fn test_deep_nesting_walked_iteratively() {
        let depth = 100_000;
        let mut program = Program::new(vec![Node::Primitive(Op::Output)]);
        for _ in 0..depth {
            program = Program::new(vec![Node::Loop(program)]);
        }

        let mut w = CodeWriter::new("  ");
        emit_block(&Trace, &mut w, &program, TapeMode::Dynamic);
        assert_eq!(w.line_count(), 2 * depth + 1);
        let out = w.finish();
        assert!(out.starts_with("while {\n  while {\n"));
        assert!(out.ends_with("}\n}\n"));
    }
}
