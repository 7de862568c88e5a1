//! Range-checked operand types.
//!
//! Each type can only be constructed through a checked conversion, so a
//! decoded instruction never carries an operand the VM cannot execute.

use crate::error::OperandError;

/// Number of registers in the register file.
pub const REGISTER_COUNT: usize = 4;

/// Prefix character required on register operands in program text.
pub const REGISTER_SIGIL: char = '#';

/// Index of one of the four registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// Register 0. Readable, never written.
    pub const ZERO: Register = Register(0);
    /// Register 1, the accumulator used by `input` and `print`.
    pub const ACCUMULATOR: Register = Register(1);

    /// Accept any register as a source operand.
    pub fn source(index: i64) -> Result<Self, OperandError> {
        match index {
            0..=3 => Ok(Register(index as u8)),
            _ => Err(OperandError::RegisterOutOfRange(index)),
        }
    }

    /// Accept registers 1-3 as a destination operand.
    pub fn destination(index: i64) -> Result<Self, OperandError> {
        match index {
            1..=3 => Ok(Register(index as u8)),
            0 => Err(OperandError::InvalidDestination(index)),
            _ => Err(OperandError::RegisterOutOfRange(index)),
        }
    }

    /// Position in the register file. Always below [`REGISTER_COUNT`].
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{REGISTER_SIGIL}{}", self.0)
    }
}

/// The 0-or-1 literal carried by `add`, `sub`, `set` and `jeq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Immediate(bool);

impl Immediate {
    pub const ZERO: Immediate = Immediate(false);
    pub const ONE: Immediate = Immediate(true);

    pub fn value(&self) -> i64 {
        self.0 as i64
    }

    pub fn is_zero(&self) -> bool {
        !self.0
    }
}

impl TryFrom<i64> for Immediate {
    type Error = OperandError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Immediate::ZERO),
            1 => Ok(Immediate::ONE),
            _ => Err(OperandError::ImmediateOutOfRange(value)),
        }
    }
}

impl std::fmt::Display for Immediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Signed displacement carried by `j`.
///
/// Fits in five bits. The executor lands `offset + 1` lines away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset(i8);

impl Offset {
    pub const MIN: i64 = -16;
    pub const MAX: i64 = 15;

    pub fn value(&self) -> i64 {
        self.0 as i64
    }
}

impl TryFrom<i64> for Offset {
    type Error = OperandError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Offset(value as i8))
        } else {
            Err(OperandError::OffsetOutOfRange(value))
        }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
