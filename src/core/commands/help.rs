use std::io::Write;

use super::{logo, CommandStatus, BUILTINS};
use crate::core::Session;
use crate::error::ShellError;

const PRIMARY_PLATFORM: &str = "linux";

pub(super) fn run(session: &mut Session) -> Result<CommandStatus, ShellError> {
    logo::print(session)?;

    let names: Vec<String> = BUILTINS
        .iter()
        .map(|entry| session.highlighter.highlight_name(&format!("{:<8}", entry.name)))
        .collect();

    let out = session.console.out();
    writeln!(out)?;
    writeln!(out, "Welcome to shoal, a tiny interactive shell.")?;
    writeln!(out, "Built-in commands:")?;
    for (name, entry) in names.iter().zip(BUILTINS.iter()) {
        writeln!(out, "  {} {}", name, entry.description)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Anything else is started as a program with its arguments, e.g. `ls -l`."
    )?;

    if let Some(note) = platform_note(std::env::consts::OS) {
        writeln!(out, "{}", note)?;
    }

    Ok(CommandStatus::Success)
}

fn platform_note(os: &str) -> Option<String> {
    if os == PRIMARY_PLATFORM {
        return None;
    }
    Some(format!(
        "Note: shoal is built for {}; running programs on {} may behave differently.",
        PRIMARY_PLATFORM, os
    ))
}
