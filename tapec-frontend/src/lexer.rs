//! # Lexer for Tape Machine Source
//!
//! Every character outside the eight-symbol alphabet is commentary and is
//! skipped by the lexer itself.

use crate::error::SourceLocation;
use logos::Logos;
use std::ops::Range;
use tapec_ir::Instruction;

/// Source tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^<>+\-.,\[\]]+")]
pub enum Token {
    #[token(">")]
    MoveRight,

    #[token("<")]
    MoveLeft,

    #[token("+")]
    Increment,

    #[token("-")]
    Decrement,

    #[token(".")]
    Output,

    #[token(",")]
    Input,

    #[token("[")]
    LoopStart,

    #[token("]")]
    LoopEnd,
}

impl Token {
    pub const fn instruction(self) -> Instruction {
        match self {
            Token::MoveRight => Instruction::MoveRight,
            Token::MoveLeft => Instruction::MoveLeft,
            Token::Increment => Instruction::Increment,
            Token::Decrement => Instruction::Decrement,
            Token::Output => Instruction::Output,
            Token::Input => Instruction::Input,
            Token::LoopStart => Instruction::LoopStart,
            Token::LoopEnd => Instruction::LoopEnd,
        }
    }
}

/// Instructions of `source` with their byte spans, in source order
pub fn tokenize(source: &str) -> impl Iterator<Item = (Instruction, Range<usize>)> + '_ {
    Token::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|t| (t.instruction(), span)))
}

/// Find the raw-source location of the `position`-th instruction
pub fn locate(source: &str, position: usize) -> Option<SourceLocation> {
    let (_, span) = tokenize(source).nth(position)?;
    let before = &source[..span.start];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;

    Some(SourceLocation {
        line,
        column,
        offset: span.start,
    })
}
