//! Decoder: token lists → validated instructions.
//!
//! Every check on a line runs even after an earlier one fails, so a single
//! pass reports all violations.

use crate::error::AsmError;
use bbvv_common::{Immediate, Instruction, Offset, Opcode, OperandError, Register, REGISTER_SIGIL};

/// Decode one token list into an instruction.
///
/// Returns every violation found on the line.
pub(crate) fn decode_line(tokens: &[&str], line: usize) -> Result<Instruction, Vec<AsmError>> {
    let Some((&mnemonic, args)) = tokens.split_first() else {
        return Ok(Instruction::Empty);
    };

    let Some(opcode) = Opcode::from_mnemonic(mnemonic) else {
        return Err(vec![AsmError::UnknownOpcode {
            line,
            text: tokens.join(" "),
        }]);
    };

    let mut errors = Vec::new();
    if tokens.len() != opcode.token_count() {
        errors.push(AsmError::WrongArgumentCount {
            line,
            opcode: opcode.mnemonic(),
            expected: opcode.token_count() - 1,
            found: args.len(),
        });
    }

    let decoded = match opcode {
        Opcode::Add | Opcode::Sub | Opcode::Set | Opcode::Jeq => {
            let dest = expect_register(args, 1, line, Register::destination, &mut errors);
            let src = expect_register(args, 2, line, Register::source, &mut errors);
            let imm = expect_operand(args, 3, line, Immediate::try_from, &mut errors);
            match (dest, src, imm) {
                (Some(dest), Some(src), Some(imm)) => {
                    Instruction::with_registers(opcode, dest, src, imm)
                }
                _ => None,
            }
        }

        Opcode::J => expect_operand(args, 1, line, Offset::try_from, &mut errors)
            .map(|offset| Instruction::Jump { offset }),

        Opcode::Input | Opcode::Print | Opcode::Exit | Opcode::Empty => {
            Instruction::nullary(opcode)
        }
    };

    match decoded {
        Some(instr) if errors.is_empty() => Ok(instr),
        _ => Err(errors),
    }
}

/// Parse a decimal operand token.
fn parse_number(
    token: &str,
    raw: &str,
    line: usize,
    arg: usize,
    errors: &mut Vec<AsmError>,
) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(AsmError::InvalidNumber {
                line,
                arg,
                token: raw.to_string(),
            });
            None
        }
    }
}

/// Range-check a parsed operand.
fn check_range<T>(
    value: i64,
    check: impl FnOnce(i64) -> Result<T, OperandError>,
    line: usize,
    arg: usize,
    errors: &mut Vec<AsmError>,
) -> Option<T> {
    match check(value) {
        Ok(v) => Some(v),
        Err(source) => {
            errors.push(AsmError::OperandOutOfRange { line, arg, source });
            None
        }
    }
}

/// Decode a bare numeric operand at token position `arg`.
fn expect_operand<T>(
    args: &[&str],
    arg: usize,
    line: usize,
    check: impl FnOnce(i64) -> Result<T, OperandError>,
    errors: &mut Vec<AsmError>,
) -> Option<T> {
    let token = *args.get(arg - 1)?;
    let value = parse_number(token, token, line, arg, errors)?;
    check_range(value, check, line, arg, errors)
}

/// Decode a `#N` register operand at token position `arg`.
///
/// A missing sigil is reported, but the token is still parsed and
/// range-checked.
fn expect_register(
    args: &[&str],
    arg: usize,
    line: usize,
    check: fn(i64) -> Result<Register, OperandError>,
    errors: &mut Vec<AsmError>,
) -> Option<Register> {
    let token = *args.get(arg - 1)?;
    let digits = match token.strip_prefix(REGISTER_SIGIL) {
        Some(rest) => rest,
        None => {
            errors.push(AsmError::MissingSigil {
                line,
                arg,
                token: token.to_string(),
            });
            token
        }
    };
    let value = parse_number(digits, token, line, arg, errors)?;
    check_range(value, check, line, arg, errors)
}
