//! Structural validation of loop delimiters

use crate::error::BracketMismatch;
use tapec_ir::Instruction;

/// Check that every `[` has a matching `]` and loops nest properly
///
/// Fails on the first `]` with no open loop, or, at end of input, on the
/// earliest `[` that was never closed. Characters other than the eight
/// symbols are ignored but still count towards positions, so callers should
/// pass sanitized text.
pub fn validate(sanitized: &str) -> Result<(), BracketMismatch> {
    let mut open = 0usize;
    let mut outermost = 0usize;

    for (position, c) in sanitized.chars().enumerate() {
        match Instruction::from_symbol(c) {
            Some(Instruction::LoopStart) => {
                if open == 0 {
                    outermost = position;
                }
                open += 1;
            }
            Some(Instruction::LoopEnd) => {
                if open == 0 {
                    return Err(BracketMismatch::UnexpectedClose { position });
                }
                open -= 1;
            }
            _ => {}
        }
    }

    if open != 0 {
        return Err(BracketMismatch::UnclosedOpen { position: outermost });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_balanced() {
        assert!(validate("").is_ok());
        assert!(validate("+-<>.,").is_ok());
        assert!(validate("[]").is_ok());
        assert!(validate("[[][]]").is_ok());
        assert!(validate("+[>[-]<]").is_ok());
    }

    #[test]
    fn test_validate_stray_close() {
        assert_eq!(validate("]"), Err(BracketMismatch::UnexpectedClose { position: 0 }));
        assert_eq!(validate("+[]]["), Err(BracketMismatch::UnexpectedClose { position: 3 }));
    }

    #[test]
    fn test_validate_unclosed_reports_earliest() {
        assert_eq!(validate(">>+++[[<-->]"), Err(BracketMismatch::UnclosedOpen { position: 5 }));
        assert_eq!(validate("[]+["), Err(BracketMismatch::UnclosedOpen { position: 3 }));
        assert_eq!(validate("[[["), Err(BracketMismatch::UnclosedOpen { position: 0 }));
    }

    #[test]
    fn test_validate_close_reported_before_unclosed() {
        // The stray ']' is reached first, even though a '[' follows
        assert_eq!(validate("]["), Err(BracketMismatch::UnexpectedClose { position: 0 }));
    }
}
