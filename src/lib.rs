//! Shared fixtures for the workspace-level tests

/// Canonical greeting program, with commentary
pub const HELLO_WORLD_SOURCE: &str = include_str!("../tests/fixtures/hello_world.b");

/// The same program with every comment stripped
pub const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

/// What [`HELLO_WORLD`] prints
pub const HELLO_WORLD_OUTPUT: &[u8] = b"Hello World!\n";

/// Read one byte, write it back
pub const ECHO: &str = ",.";

/// One `[` is never closed
pub const UNBALANCED: &str = ">>+++[[<-->]";

/// Not text at all
pub const NUMBERS: [i64; 4] = [2, 4, 8, 16];

/// `depth` nested loops around a single decrement
pub fn nested_loops(depth: usize) -> String {
    format!("{}-{}", "[".repeat(depth), "]".repeat(depth))
}
