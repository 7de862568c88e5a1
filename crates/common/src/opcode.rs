//! Opcode definitions for the bbvv instruction set.

/// Identifies the operation an instruction performs.
///
/// The set is closed: program text naming anything else is rejected by the
/// decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `reg[dest] += reg[src] + imm`.
    Add,
    /// `reg[dest] -= reg[src] + imm`.
    Sub,
    /// `reg[dest] = reg[src] + imm`.
    Set,
    /// Conditional skip on `reg[dest] == reg[src]`.
    Jeq,
    /// Relative jump. Lands `offset + 1` lines away.
    J,
    /// Read one integer into register 1.
    Input,
    /// Write register 1 followed by a newline.
    Print,
    /// Stop execution successfully.
    Exit,
    /// Placeholder for a blank or comment-only line.
    Empty,
}

/// All opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 9] = [
    Opcode::Add,
    Opcode::Sub,
    Opcode::Set,
    Opcode::Jeq,
    Opcode::J,
    Opcode::Input,
    Opcode::Print,
    Opcode::Exit,
    Opcode::Empty,
];

impl Opcode {
    /// The mnemonic used in program text.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Set => "set",
            Opcode::Jeq => "jeq",
            Opcode::J => "j",
            Opcode::Input => "input",
            Opcode::Print => "print",
            Opcode::Exit => "exit",
            Opcode::Empty => "empty",
        }
    }

    /// Look up an opcode by its exact (case-sensitive) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Number of tokens a line with this opcode must have, mnemonic included.
    pub fn token_count(&self) -> usize {
        match self {
            Opcode::Add | Opcode::Sub | Opcode::Set | Opcode::Jeq => 4,
            Opcode::J => 2,
            Opcode::Input | Opcode::Print | Opcode::Exit | Opcode::Empty => 1,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
