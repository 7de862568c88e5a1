//! Integration tests for the bbvv assembler.
//!
//! Tests cover:
//! - The reference scenarios, assembled from text and executed
//! - Operand boundary values
//! - Batch error reporting across lines
//! - Render → decode roundtrip for arbitrary valid instructions

use bbvv_assembler::{assemble, disassemble, AsmError};
use bbvv_common::{Immediate, Instruction, Offset, OperandError, Program, Register};
use bbvv_vm::{RuntimeError, VM};
use proptest::prelude::*;

// ---- Test helpers ----

/// Assemble and run `text`, returning the result and printed output.
fn run_text(text: &str, input: &str) -> (Result<(), RuntimeError>, String) {
    let program = assemble(text).unwrap();
    let mut output = Vec::new();
    let result = bbvv_vm::run(&program, input.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}

// ---- Scenarios ----

#[test]
fn scenario_set_print_exit() {
    let (result, out) = run_text("set #1 #0 1\nprint\nexit", "");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "1\n");
}

#[test]
fn scenario_infinite_increment_loop() {
    let program = assemble("add #1 #0 1\nj -2").unwrap();
    let mut vm = VM::new(&program, &b""[..], Vec::new()).with_step_limit(1_000);
    assert_eq!(
        vm.execute(),
        Err(RuntimeError::StepLimitExceeded { limit: 1_000 })
    );
    assert_eq!(vm.registers()[1], 500);
}

#[test]
fn scenario_blank_line_then_exit() {
    let program = assemble("\nexit").unwrap();
    assert_eq!(
        program.instructions,
        vec![Instruction::Empty, Instruction::Exit]
    );
    let mut output = Vec::new();
    assert_eq!(bbvv_vm::run(&program, &b""[..], &mut output), Ok(()));
    assert!(output.is_empty());
}

#[test]
fn scenario_two_errors_both_reported() {
    let errors = assemble("set #0 #1 0\nprint\nj 99\nexit").unwrap_err();
    assert_eq!(
        errors,
        vec![
            AsmError::OperandOutOfRange {
                line: 0,
                arg: 1,
                source: OperandError::InvalidDestination(0),
            },
            AsmError::OperandOutOfRange {
                line: 2,
                arg: 1,
                source: OperandError::OffsetOutOfRange(99),
            },
        ]
    );
}

#[test]
fn scenario_print_without_exit() {
    let (result, out) = run_text("print", "");
    assert_eq!(result, Err(RuntimeError::EndOfProgram { at: 1 }));
    assert_eq!(out, "0\n");
}

// ---- Programs ----

#[test]
fn comment_lines_count_for_jumps() {
    // The jump crosses a comment-only line; it must still land on `print`.
    let text = "\
set #1 #0 1
j 2          // skip the exit below
// never reached
exit
print
exit
";
    let (result, out) = run_text(text, "");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "1\n");
}

#[test]
fn sum_two_inputs() {
    // #2 = first input, #1 = second input, #1 += #2
    let text = "\
input
set #2 #1 0
input
add #1 #2 0
print
exit
";
    let (result, out) = run_text(text, "20\n22\n");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "42\n");
}

#[test]
fn multiply_by_repeated_addition() {
    // #1 = a * b for a, b >= 0, using #2 as a counter and #3 as the result.
    let text = "\
input               // 0: a
set #2 #1 0         // 1: #2 = a
input               // 2: b
set #3 #0 0         // 3: #3 = 0
jeq #2 #0 1         // 4: counter == 0 -> 6
j 1                 // 5: -> 7
j 3                 // 6: -> 10
add #3 #1 0         // 7: #3 += b
sub #2 #0 1         // 8: counter -= 1
j -6                // 9: -> 4
set #1 #3 0         // 10
print               // 11
exit                // 12
";
    let (result, out) = run_text(text, "6 7");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "42\n");

    let (_, out) = run_text(text, "0 7");
    assert_eq!(out, "0\n");
}

// ---- Boundaries ----

#[test]
fn jump_offset_boundaries() {
    assert!(assemble("j -16").is_ok());
    assert!(assemble("j 15").is_ok());
    assert!(assemble("j -17").is_err());
    assert!(assemble("j 16").is_err());
}

#[test]
fn jeq_immediate_two_rejected() {
    assert!(assemble("jeq #1 #1 2").is_err());
}

#[test]
fn destination_zero_rejected_source_zero_accepted() {
    for op in ["add", "sub", "set", "jeq"] {
        assert!(assemble(&format!("{op} #0 #2 1")).is_err(), "{op} dest 0");
        assert!(assemble(&format!("{op} #2 #0 1")).is_ok(), "{op} src 0");
    }
}

#[test]
fn unknown_opcode_rejects_whole_program() {
    let errors = assemble("set #1 #0 1\nprint\nhalt\n").unwrap_err();
    assert_eq!(
        errors,
        vec![AsmError::UnknownOpcode {
            line: 2,
            text: "halt".to_string(),
        }]
    );
}

#[test]
fn every_violation_on_every_line() {
    let text = "\
add 1 #5 3
j
print extra
";
    let errors = assemble(text).unwrap_err();
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.iter().map(AsmError::line).collect::<Vec<_>>(),
        vec![0, 0, 0, 1, 2]
    );
}

// ---- Roundtrip ----

fn arb_instruction() -> impl Strategy<Value = Instruction> {
    let operands = (1i64..=3, 0i64..=3, 0i64..=1).prop_map(|(d, s, i)| {
        (
            Register::destination(d).unwrap(),
            Register::source(s).unwrap(),
            Immediate::try_from(i).unwrap(),
        )
    });
    prop_oneof![
        operands.clone().prop_map(|(dest, src, imm)| Instruction::Add { dest, src, imm }),
        operands.clone().prop_map(|(dest, src, imm)| Instruction::Sub { dest, src, imm }),
        operands.clone().prop_map(|(dest, src, imm)| Instruction::Set { dest, src, imm }),
        operands.prop_map(|(dest, src, imm)| Instruction::Jeq { dest, src, imm }),
        (Offset::MIN..=Offset::MAX).prop_map(|o| Instruction::Jump {
            offset: Offset::try_from(o).unwrap()
        }),
        Just(Instruction::Input),
        Just(Instruction::Print),
        Just(Instruction::Exit),
        Just(Instruction::Empty),
    ]
}

proptest! {
    /// Rendering a valid program and decoding it yields the same program.
    #[test]
    fn render_decode_roundtrip(
        instrs in prop::collection::vec(arb_instruction(), 0..40)
    ) {
        let program = Program::new(instrs);
        let text = disassemble(&program);
        prop_assert_eq!(assemble(&text), Ok(program));
    }

    /// Decoding never panics on arbitrary text.
    #[test]
    fn decode_arbitrary_text(text in "[a-z#0-9 \\-/\n]{0,80}") {
        let _ = assemble(&text);
    }
}
