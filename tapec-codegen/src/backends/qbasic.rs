//! # QBasic Backend
//!
//! QB64 dialect with classic line numbers. Loops become conditional jumps:
//!
//! ```text
//! 30 IF tape(cursor) = 0 THEN GOTO 60
//! 40 ...body...
//! 50 GOTO 30
//! 60 ...
//! ```
//!
//! Line numbers are only known once the whole listing exists, so statements
//! are collected first and jump targets resolved when rendering. A final
//! `END` gives every loop exit a line to land on.

use crate::emitter::Emitter;
use crate::fold::{fold, Step};
use crate::labels::{Label, LabelAllocator};
use crate::target::Target;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

/// Spacing between consecutive line numbers
const LINE_STEP: usize = 10;

pub struct QBasicEmitter;

/// One numbered line, optionally ending in a jump
#[derive(Debug)]
struct Statement {
    text: String,
    jump: Option<Label>,
}

/// Statements plus label positions
#[derive(Debug, Default)]
struct Listing {
    statements: Vec<Statement>,
    positions: Vec<Option<usize>>,
    pending: Vec<Label>,
}

impl Listing {
    fn push(&mut self, text: impl Into<String>) {
        self.push_statement(text.into(), None);
    }

    fn push_jump(&mut self, text: impl Into<String>, target: Label) {
        self.push_statement(text.into(), Some(target));
    }

    fn push_statement(&mut self, text: String, jump: Option<Label>) {
        let index = self.statements.len();
        for label in self.pending.drain(..) {
            if self.positions.len() <= label.id() {
                self.positions.resize(label.id() + 1, None);
            }
            self.positions[label.id()] = Some(index);
        }
        self.statements.push(Statement { text, jump });
    }

    /// Attach `label` to the next statement pushed
    fn mark(&mut self, label: Label) {
        self.pending.push(label);
    }

    fn line_number(index: usize) -> usize {
        (index + 1) * LINE_STEP
    }

    fn render(&self, out: &mut String) {
        for (index, statement) in self.statements.iter().enumerate() {
            let number = Self::line_number(index);
            match statement.jump {
                None => out.push_str(&format!("{} {}\n", number, statement.text)),
                Some(label) => {
                    // Every label is marked before the trailing END is pushed.
                    let target = self
                        .positions
                        .get(label.id())
                        .copied()
                        .flatten()
                        .map(Self::line_number)
                        .unwrap_or(number);
                    out.push_str(&format!("{} {} {}\n", number, statement.text, target));
                }
            }
        }
    }
}

impl Emitter for QBasicEmitter {
    fn target(&self) -> Target {
        Target::QBasic
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut listing = Listing::default();
        let mut labels = LabelAllocator::new();

        listing.push(format!("REM {}", config.program_name));
        listing.push("DIM cursor AS LONG");
        match config.tape_mode {
            TapeMode::Dynamic => listing.push("REDIM tape(0 TO 0) AS INTEGER"),
            TapeMode::Fixed => listing.push(format!(
                "DIM tape(0 TO {}) AS INTEGER",
                config.tape_size.saturating_sub(1)
            )),
        }
        if program.contains(Op::Input) {
            listing.push("DIM ch AS STRING");
        }
        listing.push("cursor = 0");
        emit_steps(&mut listing, &mut labels, program, config.tape_mode);
        listing.push("END");

        let mut out = String::from("$CONSOLE:ONLY\n");
        listing.render(&mut out);
        out
    }
}

/// Open loops carry the labels of their entry test and exit
type Frame<'a> = (std::vec::IntoIter<Step<'a>>, Option<(Label, Label)>);

fn emit_steps(
    listing: &mut Listing,
    labels: &mut LabelAllocator,
    program: &Program,
    mode: TapeMode,
) {
    let mut stack: Vec<Frame<'_>> = vec![(fold(program).into_iter(), None)];
    while let Some((steps, _)) = stack.last_mut() {
        let step = match steps.next() {
            Some(step) => step,
            None => {
                if let Some((_, Some((start, end)))) = stack.pop() {
                    listing.push_jump("GOTO", start);
                    listing.mark(end);
                }
                continue;
            }
        };
        match step {
            Step::Move(amount) if amount > 0 => {
                listing.push(format!("cursor = cursor + {}", amount));
                if mode == TapeMode::Dynamic {
                    listing.push(
                        "IF cursor > UBOUND(tape) THEN REDIM _PRESERVE tape(0 TO 2 * cursor) AS INTEGER",
                    );
                }
            }
            Step::Move(amount) => listing.push(format!("cursor = cursor - {}", -amount)),
            Step::Add(delta) => {
                let delta = if delta > 0 { delta } else { 256 + delta };
                listing.push(format!(
                    "tape(cursor) = (tape(cursor) + {}) MOD 256",
                    delta
                ));
            }
            Step::Output => listing.push("PRINT CHR$(tape(cursor));"),
            Step::Input => {
                listing.push("ch = INPUT$(1): IF LEN(ch) > 0 THEN tape(cursor) = ASC(ch)")
            }
            Step::Loop(body) => {
                let (start, end) = labels.loop_pair();
                listing.mark(start);
                listing.push_jump("IF tape(cursor) = 0 THEN GOTO", end);
                stack.push((fold(body).into_iter(), Some((start, end))));
            }
        }
    }
}
