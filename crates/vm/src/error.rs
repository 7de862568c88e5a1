//! Runtime faults for the bbvv VM.
//!
//! Decoding already guarantees every register and immediate is in range, so
//! the only faults left are control flow leaving the program and console
//! failures. Variants carry the program counter (`at`) where it applies.

use thiserror::Error;

/// Errors that stop program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Program counter went past the last instruction without `exit`.
    #[error("program has reached end of file at instruction {at}, explicitly exit with an exit command instead")]
    EndOfProgram { at: usize },

    /// A jump landed before instruction 0.
    #[error("jump at instruction {at} lands on line {target}, before the start of the program")]
    JumpBeforeStart { at: usize, target: i64 },

    /// `input` found no more values to read.
    #[error("input at instruction {at}: no more input available")]
    InputExhausted { at: usize },

    /// `input` read something that is not an integer.
    #[error("input at instruction {at}: '{token}' is not an integer")]
    InvalidInput { at: usize, token: String },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed at instruction {at}: {message}")]
    Io { at: usize, message: String },

    /// The configured step limit was reached before `exit`.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}
