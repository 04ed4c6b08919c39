use std::io::Write;

use super::CommandStatus;
use crate::core::Session;
use crate::error::ShellError;

pub const LOGO: &str = r"     _                 _
 ___| |__   ___   __ _| |
/ __| '_ \ / _ \ / _` | |
\__ \ | | | (_) | (_| | |
|___/_| |_|\___/ \__,_|_|";

pub(super) fn print(session: &mut Session) -> Result<(), ShellError> {
    let banner = session.highlighter.highlight_banner(LOGO);
    writeln!(session.console.out(), "{}", banner)?;
    Ok(())
}

pub(super) fn run(session: &mut Session) -> Result<CommandStatus, ShellError> {
    print(session)?;
    Ok(CommandStatus::Success)
}
