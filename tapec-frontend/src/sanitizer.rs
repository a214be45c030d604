//! Sanitizer: strip everything but the eight instruction symbols

use crate::lexer::tokenize;

/// Keep only the recognized instruction symbols, in source order
///
/// Total and idempotent: `sanitize(&sanitize(s)) == sanitize(s)`.
pub fn sanitize(source: &str) -> String {
    tokenize(source).map(|(instruction, _)| instruction.symbol()).collect()
}
