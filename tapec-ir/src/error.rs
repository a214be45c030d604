//! # Error Types for the Tape Machine IR

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IrError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Program encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, IrError>;
