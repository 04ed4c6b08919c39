use std::io::{self, IsTerminal};

pub mod environment;

use crate::{
    core::{
        commands::{dispatch, CommandStatus},
        Session, ShellState,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::{tokenize, Console},
};

/// The read, tokenize, dispatch loop.
pub struct Shell {
    session: Session,
}

impl Shell {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let highlighter = SyntaxHighlighter::new(flags.color_for(io::stdout().is_terminal()));
        let err_highlighter = SyntaxHighlighter::new(flags.color_for(io::stderr().is_terminal()));

        let console = if io::stdin().is_terminal() {
            Console::interactive(highlighter)?
        } else {
            Console::piped()
        };

        Ok(Shell {
            session: Session::with_highlighters(console, highlighter, err_highlighter)?,
        })
    }

    pub fn with_console(console: Console, highlighter: SyntaxHighlighter) -> Result<Self, ShellError> {
        Ok(Shell {
            session: Session::new(console, highlighter)?,
        })
    }

    pub fn state(&self) -> &ShellState {
        &self.session.state
    }

    /// Runs until `exit`. Errors returned here end the session.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = format!("{} > ", self.session.state.cwd);
            let line = self.session.console.read_line(&prompt)?;

            if line.trim().is_empty() {
                continue;
            }

            if self.execute_line(&line)?.is_exit() {
                log::debug!("exit requested, leaving the loop");
                return Ok(());
            }
        }
    }

    /// Tokenizes and dispatches one line. The token vector lives only for
    /// this call.
    pub fn execute_line(&mut self, line: &str) -> Result<CommandStatus, ShellError> {
        let tokens = tokenize(line, line.len())?;
        if tokens.is_empty() {
            return Ok(CommandStatus::Success);
        }

        environment::note_env_references(&tokens);
        dispatch(&tokens, &mut self.session)
    }
}
