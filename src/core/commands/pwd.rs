use std::io::Write;

use super::CommandStatus;
use crate::core::Session;
use crate::error::ShellError;

pub(super) fn run(session: &mut Session) -> Result<CommandStatus, ShellError> {
    writeln!(session.console.out(), "{}", session.state.cwd)?;
    Ok(CommandStatus::Success)
}
