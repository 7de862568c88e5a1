//! bbvv assembler — program text → validated [`Program`].
//!
//! Decoding runs in two passes:
//!
//! 1. **Load** — each source line becomes a token list; comments are
//!    stripped and blank lines become `empty` placeholders.
//! 2. **Decode** — each token list becomes an [`Instruction`], with every
//!    violation in the whole program collected before failing.
//!
//! # Usage
//!
//! ```
//! use bbvv_assembler::{assemble, disassemble};
//!
//! let text = "set #1 #0 1\nprint\nexit\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.len(), 3);
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! [`Instruction`]: bbvv_common::Instruction

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::disassemble;
pub use error::AsmError;
pub use lexer::COMMENT_MARKER;

use bbvv_common::Program;
use parser::decode_line;
use tracing::debug;

/// Split program text into token lists, one per source line.
pub fn load(text: &str) -> Vec<Vec<&str>> {
    lexer::load(text)
}

/// Decode loaded token lists into a program.
///
/// Returns all violations found, in line order. The program is only
/// produced when there are none.
pub fn decode(lines: &[Vec<&str>]) -> Result<Program, Vec<AsmError>> {
    let mut instructions = Vec::with_capacity(lines.len());
    let mut errors = Vec::new();

    for (line, tokens) in lines.iter().enumerate() {
        match decode_line(tokens, line) {
            Ok(instr) => instructions.push(instr),
            Err(line_errors) => errors.extend(line_errors),
        }
    }

    if errors.is_empty() {
        debug!(instructions = instructions.len(), "decoded program");
        Ok(Program::new(instructions))
    } else {
        debug!(
            lines = lines.len(),
            errors = errors.len(),
            "rejected program"
        );
        Err(errors)
    }
}

/// Load and decode program text.
pub fn assemble(text: &str) -> Result<Program, Vec<AsmError>> {
    decode(&load(text))
}
