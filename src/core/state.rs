use std::io::Write;

use super::aliases::AliasStore;
use super::commands::CommandStatus;
use super::directory::DirectoryTracker;
use crate::error::{CommandError, ShellError};
use crate::highlight::SyntaxHighlighter;
use crate::input::Console;
use crate::process::ProcessExecutor;

/// State that survives from one command to the next.
#[derive(Debug, Default)]
pub struct ShellState {
    pub cwd: DirectoryTracker,
    pub aliases: AliasStore,
}

impl ShellState {
    pub fn new() -> Result<Self, ShellError> {
        let mut cwd = DirectoryTracker::new();
        cwd.refresh()?;

        Ok(ShellState {
            cwd,
            aliases: AliasStore::new(),
        })
    }
}

/// Everything a command can reach: session state, the console and the
/// process launcher.
pub struct Session {
    pub state: ShellState,
    pub console: Console,
    pub highlighter: SyntaxHighlighter,
    /// Styles what goes to the error stream, which may be a terminal when
    /// stdout is not, or the other way round.
    pub err_highlighter: SyntaxHighlighter,
    pub executor: ProcessExecutor,
}

impl Session {
    pub fn new(console: Console, highlighter: SyntaxHighlighter) -> Result<Self, ShellError> {
        Session::with_highlighters(console, highlighter, highlighter)
    }

    pub fn with_highlighters(
        console: Console,
        highlighter: SyntaxHighlighter,
        err_highlighter: SyntaxHighlighter,
    ) -> Result<Self, ShellError> {
        Ok(Session {
            state: ShellState::new()?,
            console,
            highlighter,
            err_highlighter,
            executor: ProcessExecutor::new(),
        })
    }

    /// Writes a command failure to the error stream.
    pub fn report(&mut self, error: &CommandError) -> Result<CommandStatus, ShellError> {
        let message = self.err_highlighter.highlight_error(&error.to_string());
        writeln!(self.console.err(), "{}", message)?;
        Ok(CommandStatus::Failure)
    }
}
