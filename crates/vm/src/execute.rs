//! Main execution loop and opcode dispatch for the bbvv VM.

use crate::error::RuntimeError;
use crate::machine::{State, VM};
use bbvv_common::{Instruction, Register};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

impl<'a, R: BufRead, W: Write> VM<'a, R, W> {
    /// Execute the program until `exit` or a fault.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Execute a single instruction.
    ///
    /// Once the VM has halted this is a no-op; once it has faulted it keeps
    /// returning the same fault.
    pub fn step(&mut self) -> Result<State, RuntimeError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.state == State::Halted {
            return Ok(State::Halted);
        }

        match self.exec_next() {
            Ok(state) => {
                self.state = state;
                Ok(state)
            }
            Err(fault) => {
                debug!(pc = self.pc, steps = self.steps, %fault, "faulted");
                self.state = State::Faulted;
                self.fault = Some(fault.clone());
                Err(fault)
            }
        }
    }

    fn exec_next(&mut self) -> Result<State, RuntimeError> {
        if let Some(limit) = self.max_steps {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        let instr = self.fetch()?;
        trace!(pc = self.pc, %instr, registers = ?self.registers, "step");
        self.steps += 1;

        // Lines to skip on top of the implicit advance below.
        let skip = match instr {
            Instruction::Add { dest, src, imm } => {
                let value = self.reg(src);
                let r = self.reg_mut(dest);
                *r = r.wrapping_add(value).wrapping_add(imm.value());
                0
            }
            Instruction::Sub { dest, src, imm } => {
                let value = self.reg(src);
                let r = self.reg_mut(dest);
                *r = r.wrapping_sub(value).wrapping_sub(imm.value());
                0
            }
            Instruction::Set { dest, src, imm } => {
                *self.reg_mut(dest) = self.reg(src).wrapping_add(imm.value());
                0
            }
            Instruction::Jeq { dest, src, imm } => {
                if self.reg(dest) == self.reg(src) {
                    imm.value()
                } else if imm.is_zero() {
                    1
                } else {
                    0
                }
            }
            Instruction::Jump { offset } => offset.value(),
            Instruction::Input => {
                *self.reg_mut(Register::ACCUMULATOR) = self.exec_input()?;
                0
            }
            Instruction::Print => {
                self.exec_print()?;
                0
            }
            Instruction::Exit => {
                debug!(pc = self.pc, steps = self.steps, registers = ?self.registers, "halted");
                return Ok(State::Halted);
            }
            Instruction::Empty => 0,
        };

        // Every instruction except `exit` moves one line further than its
        // own effect, jumps included: `j -2` lands one line back and a taken
        // `jeq` with imm 1 skips a line.
        self.advance(skip + 1)?;
        Ok(State::Running)
    }

    fn exec_input(&mut self) -> Result<i64, RuntimeError> {
        let at = self.pc;
        let token = self
            .input
            .next_token()
            .map_err(|e| RuntimeError::Io {
                at,
                message: e.to_string(),
            })?
            .ok_or(RuntimeError::InputExhausted { at })?;

        token
            .parse()
            .map_err(|_| RuntimeError::InvalidInput { at, token })
    }

    fn exec_print(&mut self) -> Result<(), RuntimeError> {
        let value = self.reg(Register::ACCUMULATOR);
        writeln!(self.output, "{value}")
            .and_then(|()| self.output.flush())
            .map_err(|e| RuntimeError::Io {
                at: self.pc,
                message: e.to_string(),
            })
    }
}
