//! Runtime error types

use tapec_ir::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Pointer moved left of cell 0 at step {step}")]
    PointerUnderflow { step: u64 },

    #[error("Pointer out of bounds: cell {position} on a {size}-cell tape")]
    PointerOutOfBounds { position: usize, size: usize },

    #[error("Step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
