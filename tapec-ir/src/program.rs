//! # Program Tree
//!
//! A [`Program`] is an ordered sequence of [`Node`]s; a loop node owns a
//! nested program. Bracket balance is enforced by the type itself: there is
//! no way to represent an unmatched delimiter.
//!
//! Nesting depth is bounded only by memory, so every walk over the tree
//! (including drop, clone, comparison and encoding) uses an explicit stack
//! rather than the call stack.

use crate::error::{IrError, Result};
use crate::op::{Instruction, Op};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

/// One element of a program
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// One of the six non-loop operations
    Primitive(Op),
    /// Bracketed region: repeat `body` while the current cell is nonzero
    Loop(Program),
}

impl Node {
    /// Shorthand for a loop node
    pub fn looped(body: Vec<Node>) -> Self {
        Node::Loop(Program::new(body))
    }
}

impl From<Op> for Node {
    fn from(op: Op) -> Self {
        Node::Primitive(op)
    }
}

/// Loop-nesting tree recovered from the source
#[derive(Default)]
pub struct Program {
    nodes: Vec<Node>,
}

impl Program {
    /// Create a program from its top-level nodes
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Empty program
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top-level nodes, in source order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk yielding the instruction stream, delimiters included
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            stack: vec![self.nodes.iter()],
        }
    }

    /// Maximum loop nesting depth (0 for a loop-free program)
    pub fn depth(&self) -> usize {
        let mut current = 0usize;
        let mut max = 0;
        for instruction in self.instructions() {
            match instruction {
                Instruction::LoopStart => {
                    current += 1;
                    max = max.max(current);
                }
                Instruction::LoopEnd => current -= 1,
                _ => {}
            }
        }
        max
    }

    /// Total number of loop nodes at every level
    pub fn loop_count(&self) -> usize {
        self.instructions()
            .filter(|i| *i == Instruction::LoopStart)
            .count()
    }

    /// Total number of primitive operations at every level
    pub fn op_count(&self) -> usize {
        self.instructions()
            .filter(|i| Op::try_from(*i).is_ok())
            .count()
    }

    /// Whether `op` appears anywhere in the tree
    pub fn contains(&self, op: Op) -> bool {
        let target = op.instruction();
        self.instructions().any(|i| i == target)
    }

    /// Re-linearise into the sanitized instruction stream
    pub fn flatten(&self) -> String {
        self.instructions().map(Instruction::symbol).collect()
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(IrError::from)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(IrError::from)
    }
}

/// Rebuild a tree from a delimiter-bearing stream; `None` if unbalanced
fn assemble<I>(instructions: I) -> Option<Program>
where
    I: IntoIterator<Item = Instruction>,
{
    let mut frames: Vec<Vec<Node>> = vec![Vec::new()];
    for instruction in instructions {
        match instruction {
            Instruction::LoopStart => frames.push(Vec::new()),
            Instruction::LoopEnd => {
                if frames.len() < 2 {
                    return None;
                }
                let body = frames.pop()?;
                frames.last_mut()?.push(Node::Loop(Program::new(body)));
            }
            other => {
                let op = Op::try_from(other).ok()?;
                frames.last_mut()?.push(Node::Primitive(op));
            }
        }
    }
    if frames.len() != 1 {
        return None;
    }
    frames.pop().map(Program::new)
}

/// Iterator returned by [`Program::instructions`]
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        let level = self.stack.last_mut()?;
        match level.next() {
            Some(Node::Primitive(op)) => Some(op.instruction()),
            Some(Node::Loop(body)) => {
                self.stack.push(body.nodes.iter());
                Some(Instruction::LoopStart)
            }
            None => {
                self.stack.pop();
                if self.stack.is_empty() {
                    None
                } else {
                    Some(Instruction::LoopEnd)
                }
            }
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.nodes);
        while let Some(node) = pending.pop() {
            if let Node::Loop(mut body) = node {
                pending.append(&mut body.nodes);
            }
        }
    }
}

impl Clone for Program {
    fn clone(&self) -> Self {
        assemble(self.instructions()).unwrap_or_default()
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.instructions().eq(other.instructions())
    }
}

impl Eq for Program {}

impl Hash for Program {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for instruction in self.instructions() {
            instruction.hash(state);
        }
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Program").field(&self.flatten()).finish()
    }
}

/// Encoded as the flat instruction stream
impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let stream: Vec<Instruction> = self.instructions().collect();
        stream.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let stream = Vec::<Instruction>::deserialize(deserializer)?;
        assemble(stream).ok_or_else(|| serde::de::Error::custom("unbalanced loop delimiters"))
    }
}

impl From<Vec<Node>> for Program {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl FromIterator<Node> for Program {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}
