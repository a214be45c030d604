//! Target registry

use crate::backends::{
    CEmitter, CppEmitter, JsBaseEmitter, JsDenoEmitter, JsNodeEmitter, JsWebEmitter,
    PascalEmitter, PythonEmitter, QBasicEmitter, RustEmitter,
};
use crate::emitter::Emitter;
use crate::error::CodegenError;
use std::fmt;
use std::str::FromStr;

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    C,
    Cpp,
    Rust,
    Python,
    /// Free Pascal
    Pascal,
    /// QB64 dialect, line-numbered with `GOTO`
    QBasic,
    /// Host-agnostic JavaScript function taking `read` and `write` callbacks
    JsBase,
    /// Browser script
    JsWeb,
    /// Node.js script
    JsNode,
    /// Deno script
    JsDeno,
}

impl Target {
    /// Every supported target
    pub const ALL: [Target; 10] = [
        Target::C,
        Target::Cpp,
        Target::Rust,
        Target::Python,
        Target::Pascal,
        Target::QBasic,
        Target::JsBase,
        Target::JsWeb,
        Target::JsNode,
        Target::JsDeno,
    ];

    /// Canonical command-line name
    pub const fn name(self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Cpp => "cpp",
            Target::Rust => "rust",
            Target::Python => "python",
            Target::Pascal => "pascal",
            Target::QBasic => "qbasic",
            Target::JsBase => "js-base",
            Target::JsWeb => "js-web",
            Target::JsNode => "js-node",
            Target::JsDeno => "js-deno",
        }
    }

    /// Conventional file extension, without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Cpp => "cpp",
            Target::Rust => "rs",
            Target::Python => "py",
            Target::Pascal => "pas",
            Target::QBasic => "bas",
            Target::JsBase | Target::JsWeb | Target::JsNode | Target::JsDeno => "js",
        }
    }

    /// The emitter for this target
    pub fn emitter(self) -> &'static dyn Emitter {
        match self {
            Target::C => &CEmitter,
            Target::Cpp => &CppEmitter,
            Target::Rust => &RustEmitter,
            Target::Python => &PythonEmitter,
            Target::Pascal => &PascalEmitter,
            Target::QBasic => &QBasicEmitter,
            Target::JsBase => &JsBaseEmitter,
            Target::JsWeb => &JsWebEmitter,
            Target::JsNode => &JsNodeEmitter,
            Target::JsDeno => &JsDenoEmitter,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Target::C),
            "cpp" | "c++" | "cxx" => Ok(Target::Cpp),
            "rust" | "rs" => Ok(Target::Rust),
            "python" | "py" => Ok(Target::Python),
            "pascal" | "pas" => Ok(Target::Pascal),
            "qbasic" | "qb64" | "bas" => Ok(Target::QBasic),
            "js-base" | "js" | "javascript" => Ok(Target::JsBase),
            "js-web" | "web" => Ok(Target::JsWeb),
            // `js-cli` is the older name of the Node.js target
            "js-node" | "js-cli" | "node" => Ok(Target::JsNode),
            "js-deno" | "deno" => Ok(Target::JsDeno),
            _ => Err(CodegenError::UnknownTarget(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for target in Target::ALL {
            assert_eq!(target.name().parse::<Target>().unwrap(), target);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("js-cli".parse::<Target>().unwrap(), Target::JsNode);
        assert_eq!("C++".parse::<Target>().unwrap(), Target::Cpp);
        assert_eq!("QB64".parse::<Target>().unwrap(), Target::QBasic);
    }

    #[test]
    fn test_unknown_target() {
        assert_eq!(
            "cobol".parse::<Target>(),
            Err(CodegenError::UnknownTarget("cobol".to_string()))
        );
    }

    #[test]
    fn test_emitter_matches_target() {
        for target in Target::ALL {
            assert_eq!(target.emitter().target(), target);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Target::Rust.extension(), "rs");
        assert_eq!(Target::Pascal.extension(), "pas");
        assert_eq!(Target::JsDeno.extension(), "js");
    }
}
