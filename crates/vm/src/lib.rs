//! bbvv virtual machine — executes decoded programs.
//!
//! The VM is a register machine with:
//! - Four `i64` registers, all zero at start
//! - A program counter starting at instruction 0
//! - A console: `input` reads integers, `print` writes them
//!
//! # Usage
//!
//! ```
//! use bbvv_common::{Immediate, Instruction, Program, Register};
//! use bbvv_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::Set {
//!         dest: Register::ACCUMULATOR,
//!         src: Register::ZERO,
//!         imm: Immediate::ONE,
//!     },
//!     Instruction::Print,
//!     Instruction::Exit,
//! ]);
//!
//! let mut output = Vec::new();
//! run(&program, &b""[..], &mut output).unwrap();
//! assert_eq!(output, b"1\n");
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{State, VM};

use bbvv_common::Program;
use std::io::{BufRead, Write};

/// Execute a program against the given console until `exit`.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution stops any other way: running off
/// either end of the program or a console failure.
pub fn run<R: BufRead, W: Write>(
    program: &Program,
    input: R,
    output: W,
) -> Result<(), RuntimeError> {
    VM::new(program, input, output).execute()
}
