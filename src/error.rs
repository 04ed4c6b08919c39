use crate::process::ProcessError;
use std::io;

/// Failures that end the whole session.
///
/// Anything a single command can get wrong is a [`CommandError`] instead and
/// never reaches this type.
#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(io::Error),
    EndOfInput,
    TokenOverflow { capacity: usize },
    Logger(log::SetLoggerError),
    FlagError(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Eof => ShellError::EndOfInput,
            rustyline::error::ReadlineError::Io(e) => ShellError::Io(e),
            other => ShellError::Readline(other),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<log::SetLoggerError> for ShellError {
    fn from(err: log::SetLoggerError) -> Self {
        ShellError::Logger(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::EndOfInput => write!(f, "end of input"),
            ShellError::TokenOverflow { capacity } => {
                write!(f, "token overflow: more than {} tokens on one line", capacity)
            }
            ShellError::Logger(e) => write!(f, "Logger error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

/// A failed command. Reported on the error stream; the session keeps going.
#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    NoSuchDirectory(String),
    Os { path: String, source: io::Error },
    HomeDirNotFound,
    Process(ProcessError),
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "usage: {}", usage),
            CommandError::NoSuchDirectory(path) => write!(f, "cd: no such directory: {}", path),
            CommandError::Os { path, source } => match source.raw_os_error() {
                Some(code) => write!(f, "cd: {}: {} (os error {})", path, os_error_name(code), code),
                None => write!(f, "cd: {}: {:?}", path, source.kind()),
            },
            CommandError::HomeDirNotFound => write!(f, "cd: home directory not found"),
            CommandError::Process(e) => write!(f, "shoal: {}", e),
        }
    }
}

impl std::error::Error for CommandError {}

/// Symbolic errno name for the codes `chdir` and `getcwd` can report.
#[cfg(unix)]
pub fn os_error_name(code: i32) -> &'static str {
    match code {
        libc::EACCES => "EACCES",
        libc::EFAULT => "EFAULT",
        libc::EIO => "EIO",
        libc::ELOOP => "ELOOP",
        libc::ENAMETOOLONG => "ENAMETOOLONG",
        libc::ENOENT => "ENOENT",
        libc::ENOMEM => "ENOMEM",
        libc::ENOTDIR => "ENOTDIR",
        libc::EPERM => "EPERM",
        libc::ERANGE => "ERANGE",
        _ => "EUNKNOWN",
    }
}

#[cfg(not(unix))]
pub fn os_error_name(_code: i32) -> &'static str {
    "EUNKNOWN"
}
