//! Error types for the bbvv loader and decoder.
//!
//! `line` is the 0-based instruction index (blank lines count), `arg` is the
//! 1-based token position on that line.

use bbvv_common::OperandError;
use thiserror::Error;

/// A single validation violation found while decoding program text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// The mnemonic is not one of the nine opcodes.
    #[error("instruction #{line} is not a valid command: '{text}'")]
    UnknownOpcode { line: usize, text: String },

    /// The line has the wrong number of tokens for its opcode.
    #[error("wrong amount of arguments for instruction #{line}: {opcode} expects {expected}, found {found}")]
    WrongArgumentCount {
        line: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    /// A register operand lacks the `#` prefix.
    #[error("instruction #{line} argument #{arg} '{token}' is not prefixed with # which all registers shall be")]
    MissingSigil {
        line: usize,
        arg: usize,
        token: String,
    },

    /// An operand is not a decimal integer.
    #[error("instruction #{line} argument #{arg} '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        arg: usize,
        token: String,
    },

    /// An operand parsed but is outside its accepted range.
    #[error("instruction #{line} argument #{arg}: {source}")]
    OperandOutOfRange {
        line: usize,
        arg: usize,
        source: OperandError,
    },
}

impl AsmError {
    /// The instruction index the violation was found on.
    pub fn line(&self) -> usize {
        match self {
            AsmError::UnknownOpcode { line, .. }
            | AsmError::WrongArgumentCount { line, .. }
            | AsmError::MissingSigil { line, .. }
            | AsmError::InvalidNumber { line, .. }
            | AsmError::OperandOutOfRange { line, .. } => *line,
        }
    }
}
