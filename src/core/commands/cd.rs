use std::env;
use std::io::ErrorKind;

use super::CommandStatus;
use crate::core::{Session, ShellState};
use crate::error::{CommandError, ShellError};
use crate::path::PathExpander;

const USAGE: &str = "cd <directory>";

pub(super) fn run(args: &[&str], session: &mut Session) -> Result<CommandStatus, ShellError> {
    match change_directory(args, &mut session.state) {
        Ok(()) => Ok(CommandStatus::Success),
        Err(e) => session.report(&e),
    }
}

fn change_directory(args: &[&str], state: &mut ShellState) -> Result<(), CommandError> {
    let target = match args {
        [_, target] => *target,
        _ => return Err(CommandError::Usage(USAGE)),
    };

    let path = PathExpander::new().expand(target)?;
    env::set_current_dir(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CommandError::NoSuchDirectory(target.to_string()),
        _ => CommandError::Os {
            path: target.to_string(),
            source,
        },
    })?;

    state.cwd.refresh().map_err(|source| CommandError::Os {
        path: target.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::SyntaxHighlighter;
    use crate::input::{Console, SharedBuffer};
    use crate::test_support::CwdGuard;
    use std::fs;

    fn session(err: SharedBuffer) -> Session {
        let console = Console::scripted("", SharedBuffer::new(), err);
        Session::new(console, SyntaxHighlighter::plain()).unwrap()
    }

    #[test]
    fn test_cd_temp() {
        let dir = tempfile::tempdir().unwrap();
        let _guard = CwdGuard::lock();
        let err = SharedBuffer::new();
        let mut session = session(err.clone());

        let target = dir.path().canonicalize().unwrap();
        let target = target.to_str().unwrap();
        let status = run(&["cd", target], &mut session).unwrap();

        assert_eq!(status, CommandStatus::Success);
        assert_eq!(session.state.cwd.as_str(), target);
        assert_eq!(env::current_dir().unwrap().to_str().unwrap(), target);
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_cd_invalid() {
        let _guard = CwdGuard::lock();
        let err = SharedBuffer::new();
        let mut session = session(err.clone());
        let before = session.state.cwd.as_str().to_string();

        let status = run(&["cd", "/shoal/no/such/directory"], &mut session).unwrap();

        assert_eq!(status, CommandStatus::Failure);
        assert_eq!(session.state.cwd.as_str(), before);
        assert_eq!(
            err.contents(),
            "cd: no such directory: /shoal/no/such/directory\n"
        );
    }

    #[test]
    fn test_cd_requires_exactly_one_argument() {
        let _guard = CwdGuard::lock();
        let err = SharedBuffer::new();
        let mut session = session(err.clone());

        assert_eq!(run(&["cd"], &mut session).unwrap(), CommandStatus::Failure);
        assert_eq!(
            run(&["cd", "/", "/tmp"], &mut session).unwrap(),
            CommandStatus::Failure
        );
        assert_eq!(err.contents().matches("usage: cd <directory>").count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_cd_into_file_shows_raw_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain-file");
        fs::write(&file, "not a directory").unwrap();

        let _guard = CwdGuard::lock();
        let err = SharedBuffer::new();
        let mut session = session(err.clone());
        let before = session.state.cwd.as_str().to_string();

        let status = run(&["cd", file.to_str().unwrap()], &mut session).unwrap();

        assert_eq!(status, CommandStatus::Failure);
        assert_eq!(session.state.cwd.as_str(), before);
        let message = err.contents();
        assert!(message.contains("ENOTDIR"));
        assert!(message.contains(&format!("os error {}", libc::ENOTDIR)));
    }

    #[test]
    fn test_cd_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let Ok(home) = home.canonicalize() else {
            return;
        };
        let _guard = CwdGuard::lock();
        let mut session = session(SharedBuffer::new());

        assert_eq!(run(&["cd", "~"], &mut session).unwrap(), CommandStatus::Success);
        assert_eq!(session.state.cwd.path(), home);
    }
}
