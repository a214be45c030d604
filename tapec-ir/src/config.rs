//! # Emitter Configuration
//!
//! Options recognized by the code emitters. Not every backend honors every
//! option: the program name only matters where the target has a named unit,
//! and a backend without a growable container still picks its own idiom for
//! the dynamic tape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default tape capacity for fixed tapes (cells)
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// Default name for targets with named program units
pub const DEFAULT_PROGRAM_NAME: &str = "TapeProgram";

/// Memory representation of the tape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapeMode {
    /// Grows in the positive direction as the pointer advances
    #[default]
    Dynamic,
    /// Statically sized array of `tape_size` cells
    Fixed,
}

impl TapeMode {
    pub const fn name(self) -> &'static str {
        match self {
            TapeMode::Dynamic => "dynamic",
            TapeMode::Fixed => "fixed",
        }
    }

    #[inline]
    pub const fn is_fixed(self) -> bool {
        matches!(self, TapeMode::Fixed)
    }
}

impl fmt::Display for TapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TapeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamic" => Ok(TapeMode::Dynamic),
            "fixed" => Ok(TapeMode::Fixed),
            _ => Err(ConfigError::UnknownTapeMode(s.to_string())),
        }
    }
}

/// Backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Identifier used where the target requires a named unit
    pub program_name: String,
    /// Growable vs statically sized tape
    pub tape_mode: TapeMode,
    /// Capacity in cells, used when `tape_mode` is `Fixed`
    pub tape_size: usize,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    pub fn with_tape_mode(mut self, mode: TapeMode) -> Self {
        self.tape_mode = mode;
        self
    }

    /// Fixed tape of `size` cells
    pub fn fixed(mut self, size: usize) -> Self {
        self.tape_mode = TapeMode::Fixed;
        self.tape_size = size;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program_name.is_empty() {
            return Err(ConfigError::EmptyProgramName);
        }
        if !is_identifier(&self.program_name) {
            return Err(ConfigError::InvalidProgramName(self.program_name.clone()));
        }
        if is_reserved(&self.program_name) {
            return Err(ConfigError::ReservedProgramName(self.program_name.clone()));
        }
        if self.tape_mode.is_fixed() && self.tape_size == 0 {
            return Err(ConfigError::ZeroTapeSize);
        }
        Ok(())
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            tape_mode: TapeMode::Dynamic,
            tape_size: DEFAULT_TAPE_SIZE,
        }
    }
}

impl fmt::Display for EmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tape_mode {
            TapeMode::Dynamic => write!(f, "EmitterConfig {{ name: {}, tape: dynamic }}", self.program_name),
            TapeMode::Fixed => write!(
                f,
                "EmitterConfig {{ name: {}, tape: fixed ({} cells) }}",
                self.program_name, self.tape_size
            ),
        }
    }
}

/// Names the program unit may not take, compared case-insensitively
///
/// Pascal and the JavaScript hosts turn the program name into an identifier
/// (`program X;`, `function X(read, write)`), so it must not collide with a
/// keyword of either language or with an identifier the generated code
/// declares or calls. Pascal ignores case, hence the lowercase comparison.
pub const RESERVED_NAMES: &[&str] = &[
    // JavaScript keywords and strict-mode restricted names
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
    "extends", "false", "finally", "for", "function", "if", "implements", "import",
    "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "undefined", "var", "void", "while", "with", "yield",
    // Free Pascal reserved words
    "absolute", "and", "array", "as", "asm", "begin", "constructor", "destructor",
    "div", "downto", "end", "except", "exports", "file", "finalization", "goto",
    "implementation", "inherited", "initialization", "inline", "is", "label",
    "library", "mod", "nil", "not", "object", "of", "on", "operator", "or", "out",
    "packed", "procedure", "program", "property", "raise", "record", "reintroduce",
    "repeat", "self", "set", "shl", "shr", "string", "then", "threadvar", "to",
    "type", "unit", "until", "uses", "xor",
    // Pascal built-ins the generated program relies on
    "byte", "char", "chr", "eof", "fillchar", "input", "length", "longint", "ord",
    "output", "read", "setlength", "sizeof", "text", "write",
    // Identifiers declared or called by the generated code
    "buffer", "cursor", "deno", "document", "fs", "inputchar", "module",
    "pending", "ptr", "readbyte", "require", "run", "tape", "textencoder",
    "uint8array", "window", "writebyte",
];

/// Whether `name` collides with a reserved word or generated identifier
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    RESERVED_NAMES.contains(&lower.as_str())
}

/// ASCII identifier accepted by every target: `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Program name must not be empty
    EmptyProgramName,
    /// Program name must be an ASCII identifier
    InvalidProgramName(String),
    /// Program name collides with a target keyword or generated identifier
    ReservedProgramName(String),
    /// Fixed tapes need at least one cell
    ZeroTapeSize,
    /// Tape mode string was neither `dynamic` nor `fixed`
    UnknownTapeMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyProgramName => {
                write!(f, "program name must not be empty")
            }
            ConfigError::InvalidProgramName(name) => {
                write!(f, "program name {:?} is not an identifier ([A-Za-z_][A-Za-z0-9_]*)", name)
            }
            ConfigError::ReservedProgramName(name) => {
                write!(f, "program name {:?} is reserved in a target language", name)
            }
            ConfigError::ZeroTapeSize => {
                write!(f, "fixed tape size must be at least 1 cell")
            }
            ConfigError::UnknownTapeMode(mode) => {
                write!(f, "unknown tape mode {:?} (expected dynamic or fixed)", mode)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
