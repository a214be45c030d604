//! Typed compiler input
//!
//! Hosts hand the compiler whatever value they have; only text is a valid
//! program. Anything else fails with [`FrontendError::WrongInputType`]
//! before sanitization starts.

use crate::error::{FrontendError, Result};

/// Raw value handed to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Source text
    Text(&'a str),
    /// Undecoded bytes (e.g. read from a file); accepted when valid UTF-8
    Bytes(&'a [u8]),
    /// Numeric array from a dynamically typed host; never a program
    Numbers(&'a [i64]),
}

impl<'a> Source<'a> {
    /// Human-readable name of the value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Source::Text(_) => "text",
            Source::Bytes(_) => "bytes",
            Source::Numbers(_) => "numeric array",
        }
    }

    /// Borrow the source text
    pub fn text(self) -> Result<&'a str> {
        match self {
            Source::Text(text) => Ok(text),
            Source::Bytes(bytes) => std::str::from_utf8(bytes)
                .map_err(|_| FrontendError::WrongInputType { found: "non-UTF-8 bytes" }),
            Source::Numbers(_) => Err(FrontendError::WrongInputType {
                found: self.type_name(),
            }),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Source::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Source::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a [i64]> for Source<'a> {
    fn from(numbers: &'a [i64]) -> Self {
        Source::Numbers(numbers)
    }
}

impl<'a> From<&'a Vec<i64>> for Source<'a> {
    fn from(numbers: &'a Vec<i64>) -> Self {
        Source::Numbers(numbers.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [i64; N]> for Source<'a> {
    fn from(numbers: &'a [i64; N]) -> Self {
        Source::Numbers(numbers.as_slice())
    }
}
