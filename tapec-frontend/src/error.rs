//! Front-end errors

use thiserror::Error;

/// Structural defect in the loop delimiters
///
/// Positions are indices into the sanitized instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BracketMismatch {
    #[error("unexpected ']' at position {position} with no open loop")]
    UnexpectedClose { position: usize },

    #[error("'[' at position {position} is never closed")]
    UnclosedOpen { position: usize },
}

impl BracketMismatch {
    /// Index of the offending delimiter in the sanitized stream
    pub fn position(&self) -> usize {
        match self {
            BracketMismatch::UnexpectedClose { position }
            | BracketMismatch::UnclosedOpen { position } => *position,
        }
    }
}

/// Location of a symbol in the raw source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in characters
    pub column: usize,
    /// Byte offset into the raw text
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error("Wrong input type: expected text, found {found}")]
    WrongInputType { found: &'static str },

    #[error("Bracket mismatch: {mismatch}{}", at(.location))]
    BracketMismatch {
        mismatch: BracketMismatch,
        location: Option<SourceLocation>,
    },
}

impl FrontendError {
    pub fn is_wrong_input_type(&self) -> bool {
        matches!(self, FrontendError::WrongInputType { .. })
    }

    pub fn is_bracket_mismatch(&self) -> bool {
        matches!(self, FrontendError::BracketMismatch { .. })
    }
}

impl From<BracketMismatch> for FrontendError {
    fn from(mismatch: BracketMismatch) -> Self {
        FrontendError::BracketMismatch {
            mismatch,
            location: None,
        }
    }
}

fn at(location: &Option<SourceLocation>) -> String {
    match location {
        Some(loc) => format!(" (line {}, column {})", loc.line, loc.column),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, FrontendError>;
