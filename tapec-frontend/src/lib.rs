//! Tape Machine Front-End
//!
//! Turn raw source text into the loop-nesting [`Program`] tree.
//!
//! Pipeline: input typing ([`Source`]) → [`sanitize`] → [`validate`] →
//! [`build`]. [`parse`] runs all four and fails fast on the first defect.
//!
//! ## Example
//!
//! ```rust
//! use tapec_frontend::parse;
//!
//! let program = parse("read a byte: , then echo it: .").unwrap();
//! assert_eq!(program.flatten(), ",.");
//!
//! assert!(parse(">>+++[[<-->]").is_err());
//! ```

pub mod error;
pub mod lexer;
pub mod source;
pub mod sanitizer;
pub mod validator;
pub mod builder;

pub use error::{BracketMismatch, FrontendError, Result, SourceLocation};
pub use lexer::{locate, tokenize, Token};
pub use source::Source;
pub use sanitizer::sanitize;
pub use validator::validate;
pub use builder::build;

use tapec_ir::Program;
use tracing::debug;

/// Type-check, sanitize, validate and build a program
pub fn parse<'a>(source: impl Into<Source<'a>>) -> Result<Program> {
    let source: Source<'a> = source.into();
    let text = source.text()?;

    let sanitized = sanitize(text);
    debug!(
        source_len = text.len(),
        sanitized_len = sanitized.len(),
        "sanitized source"
    );

    validate(&sanitized).map_err(|mismatch| {
        debug!(%mismatch, "structural validation failed");
        FrontendError::BracketMismatch {
            mismatch,
            location: locate(text, mismatch.position()),
        }
    })?;

    let program = build(&sanitized).map_err(|mismatch| FrontendError::BracketMismatch {
        mismatch,
        location: locate(text, mismatch.position()),
    })?;
    debug!(
        nodes = program.len(),
        depth = program.depth(),
        loops = program.loop_count(),
        "built program tree"
    );

    Ok(program)
}

/// Check whether the source text has balanced, properly nested loops
pub fn is_valid_program(source: &str) -> bool {
    validate(&sanitize(source)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapec_ir::{Node, Op};

    #[test]
    fn test_parse_echo() {
        let program = parse(",.").unwrap();
        assert_eq!(
            program.nodes(),
            &[Node::Primitive(Op::Input), Node::Primitive(Op::Output)]
        );
    }

    #[test]
    fn test_parse_ignores_comments() {
        let program = parse("This program prints nothing\n[ - ] done").unwrap();
        assert_eq!(program.flatten(), "[-]");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bracket_mismatch() {
        let err = parse(">>+++[[<-->]").unwrap_err();
        match err {
            FrontendError::BracketMismatch { mismatch, location } => {
                assert_eq!(mismatch, BracketMismatch::UnclosedOpen { position: 5 });
                assert_eq!(location, Some(SourceLocation { line: 1, column: 6, offset: 5 }));
            }
            other => panic!("Expected BracketMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_reports_source_location() {
        let err = parse("+ +\ncomment ]").unwrap_err();
        match err {
            FrontendError::BracketMismatch { mismatch, location } => {
                assert_eq!(mismatch, BracketMismatch::UnexpectedClose { position: 2 });
                assert_eq!(location, Some(SourceLocation { line: 2, column: 9, offset: 12 }));
            }
            other => panic!("Expected BracketMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_input_type() {
        let numbers = [2i64, 4, 8, 16];
        let err = parse(&numbers[..]).unwrap_err();
        assert!(matches!(err, FrontendError::WrongInputType { .. }));
    }

    #[test]
    fn test_is_valid_program() {
        assert!(is_valid_program("+[>+<-]"));
        assert!(is_valid_program("no instructions at all"));
        assert!(!is_valid_program("]["));
        assert!(!is_valid_program("[[]"));
    }
}
