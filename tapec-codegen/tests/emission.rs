//! Emission determinism and structural properties of the generated units

use proptest::prelude::*;
use tapec_codegen::{compile, emit, Target};
use tapec_ir::EmitterConfig;

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

fn arb_straight_line() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['>', '<', '+', '-', '.', ',']), 0..8)
        .prop_map(|symbols| symbols.into_iter().collect())
}

fn arb_balanced() -> impl Strategy<Value = String> {
    arb_straight_line().prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(
            prop_oneof![inner.clone(), inner.prop_map(|body| format!("[{}]", body))],
            0..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

fn arb_target() -> impl Strategy<Value = Target> {
    prop::sample::select(Target::ALL.to_vec())
}

// ============================================================================
// Determinism
// ============================================================================

proptest! {
    #[test]
    fn test_emission_is_deterministic(source in arb_balanced(), target in arb_target()) {
        let first = compile(target, source.as_str(), None).unwrap();
        // An unrelated compilation in between must not leak state.
        let _ = compile(Target::QBasic, HELLO_WORLD, None).unwrap();
        let second = compile(target, source.as_str(), None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_comments_do_not_change_output(source in arb_balanced(), target in arb_target()) {
        let noisy: String = source.chars().flat_map(|c| [c, ' ', 'x']).collect();
        prop_assert_eq!(
            compile(target, noisy.as_str(), None).unwrap(),
            compile(target, source.as_str(), None).unwrap()
        );
    }

    #[test]
    fn test_qbasic_jumps_resolve(source in arb_balanced()) {
        let code = compile(Target::QBasic, source.as_str(), None).unwrap();
        let numbers: Vec<usize> = code
            .lines()
            .skip(1)
            .filter_map(|line| line.split_once(' '))
            .map(|(number, _)| number.parse().unwrap())
            .collect();
        prop_assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        for line in code.lines() {
            if let Some((_, target)) = line.rsplit_once("GOTO ") {
                let target: usize = target.parse().unwrap();
                prop_assert!(numbers.contains(&target));
            }
        }
    }
}

#[test]
fn test_emit_matches_compile() {
    let program = tapec_frontend::parse(HELLO_WORLD).unwrap();
    let config = EmitterConfig::default();
    for target in Target::ALL {
        assert_eq!(
            emit(target, &program, &config).unwrap(),
            compile(target, HELLO_WORLD, Some(&config)).unwrap()
        );
    }
}

// ============================================================================
// Loop structure
// ============================================================================

#[test]
fn test_structured_targets_open_one_loop_per_node() {
    let program = tapec_frontend::parse(HELLO_WORLD).unwrap();
    let loops = program.loop_count();
    let config = EmitterConfig::default();
    let cases = [
        (Target::C, "while (tape[ptr]) {"),
        (Target::Cpp, "while (tape[ptr] != 0) {"),
        (Target::Rust, "while tape[ptr] != 0 {"),
        (Target::Python, "while tape[ptr]:"),
        (Target::Pascal, "while tape[cursor] <> 0 do"),
        (Target::JsNode, "while (tape[ptr] !== 0) {"),
    ];
    for (target, header) in cases {
        let code = emit(target, &program, &config).unwrap();
        assert_eq!(code.matches(header).count(), loops, "{}", target);
    }
}

#[test]
fn test_qbasic_two_jumps_per_loop() {
    let program = tapec_frontend::parse(HELLO_WORLD).unwrap();
    let code = emit(Target::QBasic, &program, &EmitterConfig::default()).unwrap();
    assert_eq!(code.matches("THEN GOTO").count(), program.loop_count());
    assert_eq!(code.matches("GOTO").count(), 2 * program.loop_count());
}

#[test]
fn test_ten_nested_loops_indent() {
    let source = format!("{}-{}", "[".repeat(10), "]".repeat(10));
    let code = compile(Target::Python, source.as_str(), None).unwrap();
    // main body is one level, ten loops add ten more
    assert!(code.contains(&format!("{}tape[ptr] = (tape[ptr] - 1) % 256\n", "    ".repeat(11))));
}

#[test]
fn test_wraparound_folding() {
    let source = "+".repeat(257);
    let code = compile(Target::C, source.as_str(), None).unwrap();
    assert!(code.contains("tape[ptr] += 1;"));
    assert!(!code.contains("+= 257"));
}
