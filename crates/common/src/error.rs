//! Operand range errors for bbvv instructions.

use thiserror::Error;

/// An operand value that falls outside the range its slot accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Register index outside 0-3.
    #[error("register {0} does not exist (valid registers are 0-3)")]
    RegisterOutOfRange(i64),

    /// Register 0 used where a writable register is required.
    #[error("register {0} cannot be a destination (valid destinations are 1-3)")]
    InvalidDestination(i64),

    /// Immediate other than 0 or 1.
    #[error("immediate {0} is out of range (valid immediates are 0 and 1)")]
    ImmediateOutOfRange(i64),

    /// Jump offset outside -16..=15.
    #[error("jump offset {0} is out of range (valid offsets are -16 to 15)")]
    OffsetOutOfRange(i64),
}
