//! Loop-tree builder
//!
//! Turns a flat instruction stream into nested [`Program`] frames. Each `[`
//! opens a new frame; each `]` closes the top frame into a loop node of the
//! frame beneath it.

use crate::error::BracketMismatch;
use tapec_ir::{Instruction, Node, Op, Program};

/// A loop body under construction and the position of its `[`
struct Frame {
    nodes: Vec<Node>,
    opened_at: usize,
}

/// Build the program tree from sanitized text
///
/// Callers normally run [`validate`](crate::validate) first; the builder
/// still re-checks the delimiters and returns the same error `validate`
/// would.
pub fn build(sanitized: &str) -> Result<Program, BracketMismatch> {
    let mut root: Vec<Node> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    for (position, c) in sanitized.chars().enumerate() {
        let Some(instruction) = Instruction::from_symbol(c) else {
            continue;
        };

        match instruction {
            Instruction::LoopStart => frames.push(Frame {
                nodes: Vec::new(),
                opened_at: position,
            }),
            Instruction::LoopEnd => {
                let frame = frames
                    .pop()
                    .ok_or(BracketMismatch::UnexpectedClose { position })?;
                let node = Node::Loop(Program::new(frame.nodes));
                match frames.last_mut() {
                    Some(parent) => parent.nodes.push(node),
                    None => root.push(node),
                }
            }
            primitive => {
                if let Ok(op) = Op::try_from(primitive) {
                    let node = Node::Primitive(op);
                    match frames.last_mut() {
                        Some(top) => top.nodes.push(node),
                        None => root.push(node),
                    }
                }
            }
        }
    }

    if let Some(outermost) = frames.first() {
        return Err(BracketMismatch::UnclosedOpen {
            position: outermost.opened_at,
        });
    }

    Ok(Program::new(root))
}
