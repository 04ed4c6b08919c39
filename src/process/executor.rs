use std::process::{Command, Stdio};

use super::ProcessError;

/// Runs external programs in the foreground.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `args[0]` with the remaining tokens as arguments and blocks
    /// until it exits. The child's exit status is not propagated.
    pub fn spawn_process(&self, args: &[&str]) -> Result<(), ProcessError> {
        let (program, rest) = args.split_first().ok_or(ProcessError::EmptyCommand)?;

        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: program.to_string(),
            source,
        })?;
        log::debug!("{} (pid {}) exited with {}", program, child.id(), status);

        Ok(())
    }
}
