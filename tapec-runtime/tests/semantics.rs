//! Observable behavior of parsed programs on the reference machine

use proptest::prelude::*;
use tapec_frontend::parse;
use tapec_runtime::{run, Machine, MachineConfig, RuntimeError};

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

// ============================================================================
// Concrete programs
// ============================================================================

#[test]
fn test_hello_world() {
    let program = parse(HELLO_WORLD).unwrap();
    assert_eq!(run(&program, &[]).unwrap(), b"Hello World!\n");
}

#[test]
fn test_hello_world_on_fixed_tape() {
    let program = parse(HELLO_WORLD).unwrap();
    let config = MachineConfig::default().fixed(16);
    let result = Machine::new(&program, vec![], config).unwrap().run().unwrap();
    assert_eq!(result.output_text(), "Hello World!\n");
}

#[test]
fn test_echo_single_byte() {
    let program = parse(",.").unwrap();
    assert_eq!(run(&program, b"a\n").unwrap(), b"a");
}

#[test]
fn test_cat_until_eof() {
    // Copies input until a zero cell; EOF leaves the last byte in place, so
    // terminate on a trailing NUL.
    let program = parse(",[.,]").unwrap();
    assert_eq!(run(&program, b"tape\0").unwrap(), b"tape");
}

#[test]
fn test_empty_program() {
    let program = parse("").unwrap();
    assert!(run(&program, &[]).unwrap().is_empty());
}

#[test]
fn test_deep_nesting_terminates() {
    let source = format!("{}-{}", "[".repeat(10), "]".repeat(10));
    let program = parse(source.as_str()).unwrap();
    assert!(run(&program, &[]).unwrap().is_empty());
}

#[test]
fn test_infinite_loop_hits_limit() {
    let program = parse("+[]").unwrap();
    let config = MachineConfig::default().with_max_steps(1_000);
    let err = Machine::new(&program, vec![], config).unwrap().run().unwrap_err();
    assert_eq!(err, RuntimeError::StepLimitExceeded { limit: 1_000 });
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn test_cell_arithmetic_wraps(ups in 0usize..600, downs in 0usize..600) {
        let source = format!("{}{}.", "+".repeat(ups), "-".repeat(downs));
        let program = parse(source.as_str()).unwrap();
        let expected = ((ups as i64 - downs as i64).rem_euclid(256)) as u8;
        prop_assert_eq!(run(&program, &[]).unwrap(), vec![expected]);
    }

    #[test]
    fn test_comments_do_not_change_behavior(input in prop::collection::vec(1u8..=255, 0..8)) {
        let plain = parse(",[.,]").unwrap();
        let noisy = parse("read , while [ echo . read , ] done").unwrap();
        let mut terminated = input.clone();
        terminated.push(0);
        prop_assert_eq!(run(&plain, &terminated), run(&noisy, &terminated));
    }

    #[test]
    fn test_echo_copies_bytes(input in prop::collection::vec(any::<u8>(), 0..16)) {
        let source = ",.".repeat(input.len());
        let program = parse(source.as_str()).unwrap();
        prop_assert_eq!(run(&program, &input).unwrap(), input);
    }
}
