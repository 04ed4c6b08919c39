mod alias;
mod cd;
mod exit;
mod help;
mod logo;
mod pwd;

pub use logo::LOGO;

use super::Session;
use crate::error::{CommandError, ShellError};

/// Outcome of one command. `Success` and `Failure` keep the session going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
    Exit,
}

impl CommandStatus {
    pub fn is_exit(self) -> bool {
        self == CommandStatus::Exit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Help,
    Logo,
    Cd,
    Pwd,
    Alias,
}

#[derive(Debug)]
pub struct BuiltinEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub builtin: Builtin,
}

/// Builtins in declaration order; the first matching name wins.
pub const BUILTINS: [BuiltinEntry; 6] = [
    BuiltinEntry {
        name: "exit",
        description: "Leave the shell",
        builtin: Builtin::Exit,
    },
    BuiltinEntry {
        name: "help",
        description: "Show this help",
        builtin: Builtin::Help,
    },
    BuiltinEntry {
        name: "logo",
        description: "Print the shoal logo",
        builtin: Builtin::Logo,
    },
    BuiltinEntry {
        name: "cd",
        description: "Change the working directory",
        builtin: Builtin::Cd,
    },
    BuiltinEntry {
        name: "pwd",
        description: "Print the working directory",
        builtin: Builtin::Pwd,
    },
    BuiltinEntry {
        name: "alias",
        description: "Add an alias interactively and list all aliases",
        builtin: Builtin::Alias,
    },
];

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.builtin)
    }

    pub fn name(self) -> &'static str {
        BUILTINS
            .iter()
            .find(|entry| entry.builtin == self)
            .map_or("", |entry| entry.name)
    }

    /// Runs the builtin with the full token list, command name included.
    pub fn run(self, args: &[&str], session: &mut Session) -> Result<CommandStatus, ShellError> {
        match self {
            Builtin::Exit => Ok(exit::run(args)),
            Builtin::Help => help::run(session),
            Builtin::Logo => logo::run(session),
            Builtin::Cd => cd::run(args, session),
            Builtin::Pwd => pwd::run(session),
            Builtin::Alias => alias::run(args, session),
        }
    }
}

/// Runs a builtin when the first token names one, otherwise launches it as a
/// program. Only console failures come back as `Err`.
pub fn dispatch(args: &[&str], session: &mut Session) -> Result<CommandStatus, ShellError> {
    let Some(&name) = args.first() else {
        return Ok(CommandStatus::Success);
    };

    match Builtin::lookup(name) {
        Some(builtin) => {
            log::debug!("builtin {}", builtin.name());
            builtin.run(args, session)
        }
        None => {
            log::debug!("launching {}", name);
            match session.executor.spawn_process(args) {
                Ok(()) => Ok(CommandStatus::Success),
                Err(e) => session.report(&CommandError::from(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::SyntaxHighlighter;
    use crate::input::{Console, SharedBuffer};
    use crate::test_support::CwdGuard;

    fn session(script: &str) -> (Session, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let console = Console::scripted(script, out.clone(), err.clone());
        let session = Session::new(console, SyntaxHighlighter::plain()).unwrap();
        (session, out, err)
    }

    #[test]
    fn test_registry_order_and_names() {
        let names: Vec<&str> = BUILTINS.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["exit", "help", "logo", "cd", "pwd", "alias"]);

        for entry in BUILTINS.iter() {
            assert_eq!(Builtin::lookup(entry.name), Some(entry.builtin));
            assert_eq!(entry.builtin.name(), entry.name);
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Builtin::lookup("EXIT"), None);
        assert_eq!(Builtin::lookup("cd "), None);
        assert_eq!(Builtin::lookup(""), None);
        assert_eq!(Builtin::lookup("ls"), None);
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let _guard = CwdGuard::lock();
        let (mut session, out, err) = session("");
        let status = dispatch(&["exit", "1", "now"], &mut session).unwrap();
        assert_eq!(status, CommandStatus::Exit);
        assert!(out.contents().is_empty());
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_unknown_program_reports_failure() {
        let _guard = CwdGuard::lock();
        let (mut session, _, err) = session("");
        let status = dispatch(&["shoal-test-no-such-program-4711"], &mut session).unwrap();
        assert_eq!(status, CommandStatus::Failure);
        assert!(err
            .contents()
            .contains("shoal: failed to launch shoal-test-no-such-program-4711"));
    }

    #[test]
    fn test_aliases_are_not_expanded() {
        let _guard = CwdGuard::lock();
        let (mut session, _, err) = session("");
        session.state.aliases.put("shoal-alias-4711", "pwd");
        let status = dispatch(&["shoal-alias-4711"], &mut session).unwrap();
        assert_eq!(status, CommandStatus::Failure);
        assert!(err.contents().contains("failed to launch shoal-alias-4711"));
    }

    #[cfg(unix)]
    #[test]
    fn test_program_exit_status_not_propagated() {
        let _guard = CwdGuard::lock();
        let (mut session, _, err) = session("");
        assert_eq!(
            dispatch(&["false"], &mut session).unwrap(),
            CommandStatus::Success
        );
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_empty_token_list() {
        let _guard = CwdGuard::lock();
        let (mut session, out, _) = session("");
        assert_eq!(dispatch(&[], &mut session).unwrap(), CommandStatus::Success);
        assert!(out.contents().is_empty());
    }
}
