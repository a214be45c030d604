//! Code generation errors

use tapec_frontend::FrontendError;
use tapec_ir::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

impl CodegenError {
    /// Source was not text
    pub fn is_wrong_input_type(&self) -> bool {
        matches!(self, CodegenError::Frontend(e) if e.is_wrong_input_type())
    }

    /// Loop delimiters were unbalanced
    pub fn is_bracket_mismatch(&self) -> bool {
        matches!(self, CodegenError::Frontend(e) if e.is_bracket_mismatch())
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tapec_frontend::BracketMismatch;

    #[test]
    fn test_error_display() {
        let err = CodegenError::UnknownTarget("cobol".to_string());
        assert_eq!(err.to_string(), "Unknown target: cobol");

        let err = CodegenError::from(ConfigError::ZeroTapeSize);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: fixed tape size must be at least 1 cell"
        );
    }

    #[test]
    fn test_frontend_passthrough() {
        let err = CodegenError::from(FrontendError::from(BracketMismatch::UnclosedOpen { position: 2 }));
        assert!(err.is_bracket_mismatch());
        assert!(!err.is_wrong_input_type());
        assert_eq!(err.to_string(), "Bracket mismatch: '[' at position 2 is never closed");
    }
}
