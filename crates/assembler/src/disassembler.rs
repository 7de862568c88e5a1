//! Disassembler: decoded program → canonical program text.
//!
//! One instruction per line, single spaces between tokens, no comments.
//! `empty` instructions become blank lines so line numbers, and therefore
//! jump targets, are unchanged.

use bbvv_common::Program;

/// Render a program as canonical text.
///
/// The output is guaranteed to reassemble to an identical program
/// (`assemble(&disassemble(&program)) == Ok(program)`).
pub fn disassemble(program: &Program) -> String {
    let mut text = String::with_capacity(program.len() * 12);
    for instr in &program.instructions {
        text.push_str(&instr.to_string());
        text.push('\n');
    }
    text
}
