//! Decoded bbvv instructions.
//!
//! An instruction renders back to its canonical program text through
//! `Display`:
//! ```text
//! add #D #S IMM     sub #D #S IMM     set #D #S IMM     jeq #D #S IMM
//! j OFFSET          input             print             exit
//! ```
//! `Empty` renders as an empty string so that a rendered program keeps its
//! line numbering.

use crate::opcode::Opcode;
use crate::operand::{Immediate, Offset, Register};

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add {
        dest: Register,
        src: Register,
        imm: Immediate,
    },
    Sub {
        dest: Register,
        src: Register,
        imm: Immediate,
    },
    Set {
        dest: Register,
        src: Register,
        imm: Immediate,
    },
    /// Compare `dest` and `src`; the skip distance depends on `imm`.
    Jeq {
        dest: Register,
        src: Register,
        imm: Immediate,
    },
    Jump {
        offset: Offset,
    },
    Input,
    Print,
    Exit,
    Empty,
}

impl Instruction {
    /// The opcode this instruction was decoded from.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Set { .. } => Opcode::Set,
            Instruction::Jeq { .. } => Opcode::Jeq,
            Instruction::Jump { .. } => Opcode::J,
            Instruction::Input => Opcode::Input,
            Instruction::Print => Opcode::Print,
            Instruction::Exit => Opcode::Exit,
            Instruction::Empty => Opcode::Empty,
        }
    }

    /// Build the three-operand instruction for `opcode`.
    ///
    /// Returns `None` if `opcode` does not take register operands.
    pub fn with_registers(
        opcode: Opcode,
        dest: Register,
        src: Register,
        imm: Immediate,
    ) -> Option<Self> {
        match opcode {
            Opcode::Add => Some(Instruction::Add { dest, src, imm }),
            Opcode::Sub => Some(Instruction::Sub { dest, src, imm }),
            Opcode::Set => Some(Instruction::Set { dest, src, imm }),
            Opcode::Jeq => Some(Instruction::Jeq { dest, src, imm }),
            _ => None,
        }
    }

    /// Build an operand-less instruction for `opcode`.
    ///
    /// Returns `None` if `opcode` takes operands.
    pub fn nullary(opcode: Opcode) -> Option<Self> {
        match opcode {
            Opcode::Input => Some(Instruction::Input),
            Opcode::Print => Some(Instruction::Print),
            Opcode::Exit => Some(Instruction::Exit),
            Opcode::Empty => Some(Instruction::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Add { dest, src, imm }
            | Instruction::Sub { dest, src, imm }
            | Instruction::Set { dest, src, imm }
            | Instruction::Jeq { dest, src, imm } => {
                write!(f, "{} {dest} {src} {imm}", self.opcode())
            }
            Instruction::Jump { offset } => write!(f, "{} {offset}", self.opcode()),
            Instruction::Input | Instruction::Print | Instruction::Exit => {
                write!(f, "{}", self.opcode())
            }
            Instruction::Empty => Ok(()),
        }
    }
}
