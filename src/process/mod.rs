use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    EmptyCommand,
    Spawn { program: String, source: std::io::Error },
    Wait { program: String, source: std::io::Error },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyCommand => write!(f, "no program given"),
            ProcessError::Spawn { program, source } => {
                write!(f, "failed to launch {}: {}", program, source)
            }
            ProcessError::Wait { program, source } => {
                write!(f, "failed to wait for {}: {}", program, source)
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::EmptyCommand => None,
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => Some(source),
        }
    }
}
