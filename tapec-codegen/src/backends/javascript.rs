//! # JavaScript Backends
//!
//! All four JavaScript targets share one core: a function named after the
//! program that takes a `read` callback (returning a byte, or a negative
//! number at end of input) and a `write` callback. The host variants wrap
//! that core with the I/O of their runtime.

use crate::emitter::{emit_block, BlockSyntax, Emitter};
use crate::target::Target;
use crate::writer::CodeWriter;
use tapec_ir::{EmitterConfig, Op, Program, TapeMode};

const NODE_IO: &str = "\
function readByte() {
  const buffer = Buffer.alloc(1);
  for (;;) {
    try {
      return fs.readSync(0, buffer, 0, 1, null) === 1 ? buffer[0] : -1;
    } catch (err) {
      if (err.code === 'EAGAIN') continue;
      if (err.code === 'EOF') return -1;
      throw err;
    }
  }
}

function writeByte(byte) {
  fs.writeSync(1, Buffer.from([byte]));
}";

const DENO_IO: &str = "\
function readByte() {
  const buffer = new Uint8Array(1);
  return Deno.stdin.readSync(buffer) === 1 ? buffer[0] : -1;
}

function writeByte(byte) {
  Deno.stdout.writeSync(Uint8Array.of(byte));
}";

const WEB_IO: &str = "\
let pending = [];
let text = '';

function readByte() {
  if (pending.length === 0) {
    const line = window.prompt('Input:');
    if (line === null) return -1;
    pending = Array.from(new TextEncoder().encode(line + '\\n'));
  }
  return pending.shift();
}

function writeByte(byte) {
  text += String.fromCharCode(byte);
}";

/// Statement syntax shared by every JavaScript host
struct JsCore;

impl BlockSyntax for JsCore {
    fn move_pointer(&self, w: &mut CodeWriter, amount: isize, mode: TapeMode) {
        if amount > 0 {
            w.line(format!("ptr += {};", amount));
            if mode == TapeMode::Dynamic {
                w.line("while (tape.length <= ptr) tape.push(0);");
            }
        } else {
            w.line(format!("ptr -= {};", -amount));
        }
    }

    fn add(&self, w: &mut CodeWriter, delta: i16) {
        if delta > 0 {
            w.line(format!("tape[ptr] = (tape[ptr] + {}) & 255;", delta));
        } else {
            w.line(format!("tape[ptr] = (tape[ptr] - {}) & 255;", -delta));
        }
    }

    fn output(&self, w: &mut CodeWriter) {
        w.line("write(tape[ptr]);");
    }

    fn input(&self, w: &mut CodeWriter) {
        w.line("byte = read();");
        w.line("if (byte >= 0) tape[ptr] = byte & 255;");
    }

    fn loop_open(&self, w: &mut CodeWriter) {
        w.line("while (tape[ptr] !== 0) {");
    }

    fn loop_close(&self, w: &mut CodeWriter) {
        w.line("}");
    }
}

/// Write the program function at the writer's current level
fn emit_core(w: &mut CodeWriter, program: &Program, config: &EmitterConfig) {
    w.line(format!("// {}", config.program_name));
    w.line(format!("function {}(read, write) {{", config.program_name));
    w.indent();
    match config.tape_mode {
        TapeMode::Dynamic => w.line("const tape = [0];"),
        TapeMode::Fixed => w.line(format!("const tape = new Uint8Array({});", config.tape_size)),
    }
    w.line("let ptr = 0;");
    if program.contains(Op::Input) {
        w.line("let byte;");
    }
    emit_block(&JsCore, w, program, config.tape_mode);
    w.dedent();
    w.line("}");
}

fn writer() -> CodeWriter {
    let mut w = CodeWriter::new("  ");
    w.line("'use strict';");
    w.blank();
    w
}

/// Bare function, exported as a CommonJS module when loaded as one
pub struct JsBaseEmitter;

impl Emitter for JsBaseEmitter {
    fn target(&self) -> Target {
        Target::JsBase
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = writer();
        emit_core(&mut w, program, config);
        w.blank();
        w.line("if (typeof module !== 'undefined' && module.exports) {");
        w.indent();
        w.line(format!("module.exports = {};", config.program_name));
        w.dedent();
        w.line("}");
        w.finish()
    }
}

/// Browser script: prompts for input, renders output into a `<pre>`
pub struct JsWebEmitter;

impl Emitter for JsWebEmitter {
    fn target(&self) -> Target {
        Target::JsWeb
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = writer();
        w.line("(function () {");
        w.indent();
        emit_core(&mut w, program, config);
        w.blank();
        w.lines(WEB_IO);
        w.blank();
        w.line("function run() {");
        w.indent();
        w.line(format!("{}(readByte, writeByte);", config.program_name));
        w.line("const pre = document.createElement('pre');");
        w.line("pre.textContent = text;");
        w.line("document.body.appendChild(pre);");
        w.dedent();
        w.line("}");
        w.blank();
        w.line("if (document.readyState === 'loading') {");
        w.indent();
        w.line("document.addEventListener('DOMContentLoaded', run);");
        w.dedent();
        w.line("} else {");
        w.indent();
        w.line("run();");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("})();");
        w.finish()
    }
}

/// Node.js script on the process's stdin and stdout
pub struct JsNodeEmitter;

impl Emitter for JsNodeEmitter {
    fn target(&self) -> Target {
        Target::JsNode
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = writer();
        w.line("const fs = require('fs');");
        w.blank();
        emit_core(&mut w, program, config);
        w.blank();
        w.lines(NODE_IO);
        w.blank();
        w.line(format!("{}(readByte, writeByte);", config.program_name));
        w.finish()
    }
}

/// Deno script on `Deno.stdin` and `Deno.stdout`
pub struct JsDenoEmitter;

impl Emitter for JsDenoEmitter {
    fn target(&self) -> Target {
        Target::JsDeno
    }

    fn emit(&self, program: &Program, config: &EmitterConfig) -> String {
        let mut w = writer();
        emit_core(&mut w, program, config);
        w.blank();
        w.lines(DENO_IO);
        w.blank();
        w.line(format!("{}(readByte, writeByte);", config.program_name));
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> Program {
        tapec_frontend::parse("++++++++[>++++<-]>+.").unwrap()
    }

    #[test]
    fn test_core_dynamic() {
        let code = JsBaseEmitter.emit(&hello(), &EmitterConfig::default());
        assert!(code.starts_with("'use strict';\n\n// TapeProgram\nfunction TapeProgram(read, write) {\n"));
        assert!(code.contains("  const tape = [0];\n"));
        assert!(code.contains("    while (tape.length <= ptr) tape.push(0);\n"));
        assert!(code.contains("    tape[ptr] = (tape[ptr] + 4) & 255;\n"));
        assert!(code.contains("  write(tape[ptr]);\n"));
        assert!(code.contains("module.exports = TapeProgram;"));
        assert!(!code.contains("let byte"));
    }

    #[test]
    fn test_core_fixed_with_input() {
        let program = tapec_frontend::parse(",-.").unwrap();
        let config = EmitterConfig::new().fixed(512).with_program_name("Echo");
        let code = JsBaseEmitter.emit(&program, &config);
        assert!(code.contains("function Echo(read, write) {"));
        assert!(code.contains("const tape = new Uint8Array(512);"));
        assert!(code.contains("  byte = read();\n  if (byte >= 0) tape[ptr] = byte & 255;\n"));
        assert!(code.contains("tape[ptr] = (tape[ptr] - 1) & 255;"));
        assert!(!code.contains("tape.push"));
    }

    #[test]
    fn test_node_host() {
        let code = JsNodeEmitter.emit(&hello(), &EmitterConfig::default());
        assert!(code.contains("const fs = require('fs');"));
        assert!(code.contains("fs.readSync(0, buffer, 0, 1, null)"));
        assert!(code.contains("fs.writeSync(1, Buffer.from([byte]));"));
        assert!(code.ends_with("TapeProgram(readByte, writeByte);\n"));
        assert!(!code.contains("module.exports"));
    }

    #[test]
    fn test_deno_host() {
        let code = JsDenoEmitter.emit(&hello(), &EmitterConfig::default());
        assert!(code.contains("Deno.stdin.readSync(buffer)"));
        assert!(code.contains("Deno.stdout.writeSync(Uint8Array.of(byte));"));
        assert!(!code.contains("require('fs')"));
    }

    #[test]
    fn test_web_host() {
        let code = JsWebEmitter.emit(&hello(), &EmitterConfig::default());
        assert!(code.contains("(function () {\n  // TapeProgram\n  function TapeProgram(read, write) {\n"));
        assert!(code.contains("window.prompt('Input:')"));
        assert!(code.contains("    TapeProgram(readByte, writeByte);\n"));
        assert!(code.contains("document.addEventListener('DOMContentLoaded', run);"));
        assert!(code.ends_with("})();\n"));
    }

    #[test]
    fn test_hosts_share_core() {
        let config = EmitterConfig::default();
        let mut core = CodeWriter::new("  ");
        emit_core(&mut core, &hello(), &config);
        let core = core.finish();
        for code in [
            JsBaseEmitter.emit(&hello(), &config),
            JsNodeEmitter.emit(&hello(), &config),
            JsDenoEmitter.emit(&hello(), &config),
        ] {
            assert!(code.contains(&core));
        }
    }
}
