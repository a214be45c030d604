//! Public compilation entry points
//!
//! Every entry point runs the same pipeline: input typing, configuration
//! validation, [`tapec_frontend::parse`], then the target's emitter. Either
//! the whole unit is produced or an error is returned; nothing partial.

use crate::error::Result;
use crate::target::Target;
use tapec_frontend::Source;
use tapec_ir::{EmitterConfig, Program};
use tracing::debug;

/// Compile source text for `target`
///
/// `config` defaults to [`EmitterConfig::default`].
pub fn compile<'a>(
    target: Target,
    source: impl Into<Source<'a>>,
    config: Option<&EmitterConfig>,
) -> Result<String> {
    let source: Source<'a> = source.into();
    let text = source.text()?;

    let default_config;
    let config = match config {
        Some(config) => config,
        None => {
            default_config = EmitterConfig::default();
            &default_config
        }
    };
    config.validate()?;

    let program = tapec_frontend::parse(text)?;
    let code = target.emitter().emit(&program, config);
    debug!(
        %target,
        %config,
        loops = program.loop_count(),
        output_len = code.len(),
        "emitted target source"
    );

    Ok(code)
}

/// Emit an already-built program for `target`
pub fn emit(target: Target, program: &Program, config: &EmitterConfig) -> Result<String> {
    config.validate()?;
    Ok(target.emitter().emit(program, config))
}

macro_rules! entry_points {
    ($($(#[$meta:meta])* $name:ident => $target:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<'a>(
                source: impl Into<Source<'a>>,
                config: Option<&EmitterConfig>,
            ) -> Result<String> {
                compile($target, source, config)
            }
        )*
    };
}

entry_points! {
    /// Compile to a C99 program
    compile_to_c => Target::C;
    /// Compile to a C++17 program
    compile_to_cpp => Target::Cpp;
    /// Compile to a standalone Rust program
    compile_to_rust => Target::Rust;
    /// Compile to a Python 3 script
    compile_to_python => Target::Python;
    /// Compile to a Free Pascal program
    compile_to_pascal => Target::Pascal;
    /// Compile to a line-numbered QB64 program
    compile_to_qbasic => Target::QBasic;
    /// Compile to a host-agnostic JavaScript function
    compile_to_js_base => Target::JsBase;
    /// Compile to a browser script
    compile_to_js_web => Target::JsWeb;
    /// Compile to a Node.js script
    compile_to_js_node => Target::JsNode;
    /// Compile to a Deno script
    compile_to_js_deno => Target::JsDeno;
    /// Older name of [`compile_to_js_node`]
    compile_to_js_cli => Target::JsNode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use tapec_ir::ConfigError;

    #[test]
    fn test_compile_default_config() {
        let code = compile(Target::C, ",.", None).unwrap();
        assert!(code.starts_with("/* TapeProgram */\n"));
    }

    #[test]
    fn test_wrong_input_type_before_config() {
        let config = EmitterConfig::new().with_program_name("");
        let err = compile(Target::Rust, &[2i64, 4, 8, 16], Some(&config)).unwrap_err();
        assert!(err.is_wrong_input_type());
    }

    #[test]
    fn test_invalid_config() {
        let config = EmitterConfig::new().fixed(0);
        assert_eq!(
            compile(Target::Python, "+", Some(&config)),
            Err(CodegenError::InvalidConfig(ConfigError::ZeroTapeSize))
        );
    }

    #[test]
    fn test_bracket_mismatch() {
        let err = compile_to_pascal(">>+++[[<-->]", None).unwrap_err();
        assert!(err.is_bracket_mismatch());
        assert!(!err.is_wrong_input_type());
    }

    #[test]
    fn test_js_cli_alias() {
        let config = EmitterConfig::default();
        assert_eq!(
            compile_to_js_cli("+.", Some(&config)).unwrap(),
            compile_to_js_node("+.", Some(&config)).unwrap()
        );
    }

    #[test]
    fn test_emit_validates_config() {
        let config = EmitterConfig::new().with_program_name("1st");
        assert!(emit(Target::C, &Program::empty(), &config).is_err());
    }

    #[test]
    fn test_reserved_program_name_rejected() {
        for name in ["function", "writeByte", "begin"] {
            let config = EmitterConfig::new().with_program_name(name);
            assert_eq!(
                compile_to_js_node("+.", Some(&config)),
                Err(CodegenError::InvalidConfig(ConfigError::ReservedProgramName(
                    name.to_string()
                )))
            );
            assert!(compile_to_pascal("+.", Some(&config)).is_err());
        }

        let config = EmitterConfig::new().with_program_name("Echo");
        assert!(compile_to_pascal(",.", Some(&config)).unwrap().starts_with("program Echo;"));
    }
}
