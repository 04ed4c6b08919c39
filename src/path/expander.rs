use crate::error::CommandError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, CommandError> {
        match path.strip_prefix('~') {
            Some("") => self.home_dir(),
            Some(rest) => match rest.strip_prefix('/') {
                Some(stripped) => Ok(self.home_dir()?.join(stripped)),
                // "~user" is left as typed
                None => Ok(Path::new(path).to_path_buf()),
            },
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    fn home_dir(&self) -> Result<PathBuf, CommandError> {
        dirs::home_dir().ok_or(CommandError::HomeDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_untouched() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("/tmp").unwrap(), PathBuf::from("/tmp"));
        assert_eq!(expander.expand("rel/dir").unwrap(), PathBuf::from("rel/dir"));
        assert_eq!(expander.expand("a~b").unwrap(), PathBuf::from("a~b"));
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expander = PathExpander::new();
        assert_eq!(expander.expand("~").unwrap(), home);
        assert_eq!(expander.expand("~/projects").unwrap(), home.join("projects"));
    }

    #[test]
    fn test_other_user_left_alone() {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("~alice").unwrap(), PathBuf::from("~alice"));
    }
}
