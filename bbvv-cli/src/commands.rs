//! CLI command implementations.

use bbvv_common::Program;
use bbvv_vm::VM;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Validate a program file and report its size.
pub fn check(path: &Path) -> Result<(), i32> {
    let program = load_program(path)?;
    println!("OK: {} ({} instructions)", path.display(), program.len());
    Ok(())
}

/// Print a program file in canonical form.
pub fn emit(path: &Path) -> Result<(), i32> {
    let program = load_program(path)?;
    print!("{}", bbvv_assembler::disassemble(&program));
    Ok(())
}

/// Validate and execute a program file on stdin/stdout.
pub fn run(path: &Path, max_steps: Option<u64>) -> Result<(), i32> {
    let program = load_program(path)?;

    let mut vm = VM::new(&program, io::stdin().lock(), io::stdout().lock());
    if let Some(limit) = max_steps {
        vm = vm.with_step_limit(limit);
    }

    vm.execute().map_err(|e| {
        eprintln!("Error: {e}");
        3
    })?;
    debug!(steps = vm.steps(), "program exited");
    Ok(())
}

// --- Helpers ---

/// Read and decode a program file, reporting every violation.
fn load_program(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!(
            "Error: the file '{}' cannot be opened, check that it exists: {e}",
            path.display()
        );
        1
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read program");

    bbvv_assembler::assemble(&text).map_err(|errors| {
        for e in &errors {
            eprintln!("Error: {e}");
        }
        eprintln!("Error: {} error(s) found, program not run", errors.len());
        2
    })
}
