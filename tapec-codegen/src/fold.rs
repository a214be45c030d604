//! Run-length folding
//!
//! Adjacent identical primitives collapse into one counted step: `>>>`
//! becomes `Move(3)`, `---` becomes `Add(-3)`. Cell deltas are reduced
//! modulo 256 and runs that cancel out (256 increments) disappear. I/O is
//! never merged.

use tapec_ir::{Node, Op, Program, CELL_MODULUS};

/// One emitted statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Move the pointer; positive is right, never zero
    Move(isize),
    /// Add to the current cell; within -255..=255, never zero
    Add(i16),
    Output,
    Input,
    Loop(&'a Program),
}

/// Fold one nesting level of a program into steps
pub fn fold(program: &Program) -> Vec<Step<'_>> {
    let nodes = program.nodes();
    let mut steps = Vec::with_capacity(nodes.len());
    let mut i = 0;

    while i < nodes.len() {
        let op = match &nodes[i] {
            Node::Loop(body) => {
                steps.push(Step::Loop(body));
                i += 1;
                continue;
            }
            Node::Primitive(op) => *op,
        };

        let run = nodes[i..]
            .iter()
            .take_while(|node| matches!(node, Node::Primitive(other) if *other == op))
            .count();
        i += run;

        match op {
            Op::MoveRight => steps.push(Step::Move(run as isize)),
            Op::MoveLeft => steps.push(Step::Move(-(run as isize))),
            Op::Increment => steps.extend(cell_delta(run).map(Step::Add)),
            Op::Decrement => steps.extend(cell_delta(run).map(|d| Step::Add(-d))),
            Op::Output => steps.extend(std::iter::repeat(Step::Output).take(run)),
            Op::Input => steps.extend(std::iter::repeat(Step::Input).take(run)),
        }
    }

    steps
}

/// `count` unit steps reduced modulo the cell width; `None` if they cancel
fn cell_delta(count: usize) -> Option<i16> {
    let delta = (count % CELL_MODULUS as usize) as i16;
    (delta != 0).then_some(delta)
}
