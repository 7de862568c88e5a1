//! bbvv common types.
//!
//! This crate provides the data structures shared by the loader, decoder
//! and VM:
//!
//! - [`Opcode`] — the nine opcodes
//! - [`Register`], [`Immediate`], [`Offset`] — range-checked operands
//! - [`Instruction`] — a decoded instruction, one per source line
//! - [`Program`] — the instruction sequence handed to the VM
//! - [`OperandError`] — operand values outside their accepted range

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::OperandError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use operand::{Immediate, Offset, Register, REGISTER_COUNT, REGISTER_SIGIL};
pub use program::Program;
