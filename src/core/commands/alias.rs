use std::io::Write;

use super::CommandStatus;
use crate::core::Session;
use crate::error::ShellError;
use crate::input::Console;

/// With no arguments, reads a name line and a value line and stores them.
/// Always lists every alias afterwards.
pub(super) fn run(args: &[&str], session: &mut Session) -> Result<CommandStatus, ShellError> {
    if args.len() == 1 {
        match prompt_pair(&mut session.console)? {
            Some((name, value)) => session.state.aliases.put(&name, &value),
            None => log::debug!("alias entry interrupted, nothing stored"),
        }
    }

    let out = session.console.out();
    for (name, value) in session.state.aliases.iter() {
        writeln!(out, "{}: {}", name, value)?;
    }
    Ok(CommandStatus::Success)
}

fn prompt_pair(console: &mut Console) -> Result<Option<(String, String)>, ShellError> {
    let Some(name) = console.read_entry("alias name: ")? else {
        return Ok(None);
    };
    let Some(value) = console.read_entry("alias value: ")? else {
        return Ok(None);
    };
    Ok(Some((name, value)))
}
