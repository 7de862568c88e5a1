//! VM state management: register file, program counter, console.

use crate::error::RuntimeError;
use crate::io::InputTape;
use bbvv_common::{Instruction, Program, Register, REGISTER_COUNT};

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    /// `exit` executed.
    Halted,
    /// A [`RuntimeError`] stopped execution.
    Faulted,
}

/// The bbvv virtual machine.
pub struct VM<'a, R, W> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Register file. Indexed only through decoded [`Register`]s.
    pub(crate) registers: [i64; REGISTER_COUNT],
    /// Program counter (instruction index).
    pub(crate) pc: usize,
    pub(crate) state: State,
    /// The fault that stopped the run, replayed by later `step` calls.
    pub(crate) fault: Option<RuntimeError>,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    pub(crate) max_steps: Option<u64>,
    pub(crate) input: InputTape<R>,
    pub(crate) output: W,
}

impl<'a, R, W> VM<'a, R, W> {
    /// Create a new VM with zeroed registers, starting at instruction 0.
    pub fn new(program: &'a Program, input: R, output: W) -> Self {
        Self {
            program,
            registers: [0; REGISTER_COUNT],
            pc: 0,
            state: State::Running,
            fault: None,
            steps: 0,
            max_steps: None,
            input: InputTape::new(input),
            output,
        }
    }

    /// Stop with [`RuntimeError::StepLimitExceeded`] after `limit` instructions.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.max_steps = Some(limit);
        self
    }

    pub fn registers(&self) -> &[i64; REGISTER_COUNT] {
        &self.registers
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume the VM and hand back the output channel.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read a register.
    pub(crate) fn reg(&self, register: Register) -> i64 {
        self.registers[register.index()]
    }

    /// Mutable access to a register.
    pub(crate) fn reg_mut(&mut self, register: Register) -> &mut i64 {
        &mut self.registers[register.index()]
    }

    /// Fetch the instruction at the current pc.
    pub(crate) fn fetch(&self) -> Result<Instruction, RuntimeError> {
        self.program
            .get(self.pc)
            .copied()
            .ok_or(RuntimeError::EndOfProgram { at: self.pc })
    }

    /// Move the pc by `delta` lines.
    pub(crate) fn advance(&mut self, delta: i64) -> Result<(), RuntimeError> {
        let target = self.pc as i64 + delta;
        if target < 0 {
            return Err(RuntimeError::JumpBeforeStart {
                at: self.pc,
                target,
            });
        }
        self.pc = target as usize;
        Ok(())
    }
}
