use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::core::commands::BUILTINS;
use crate::highlight::SyntaxHighlighter;

/// Line-editor helper: completes builtin names in command position and
/// filesystem paths everywhere else.
pub struct ShellHelper {
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        Self { highlighter }
    }

    fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        BUILTINS
            .iter()
            .filter(|entry| entry.name.starts_with(prefix))
            .map(|entry| Pair {
                display: entry.name.to_string(),
                replacement: format!("{} ", entry.name),
            })
            .collect()
    }

    fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = match incomplete.rfind('/') {
            Some(idx) => (&incomplete[..=idx], &incomplete[idx + 1..]),
            None => ("", incomplete),
        };
        let search = if dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(dir)
        };

        let mut matches: Vec<Pair> = fs::read_dir(&search)
            .into_iter()
            .flatten()
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                    return None;
                }
                Some(path_pair(dir, &name, &entry.path()))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn path_pair(dir: &str, name: &str, path: &Path) -> Pair {
    let full = format!("{}{}", dir, name);
    if path.is_dir() {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", full),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{} ", full),
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before.rfind(' ').map_or(0, |idx| idx + 1);
        let word = &before[start..];

        let in_command_position = before[..start].trim().is_empty();
        let matches = if in_command_position {
            self.complete_command(word)
        } else {
            self.complete_path(word)
        };

        Ok((start, matches))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn helper() -> ShellHelper {
        ShellHelper::new(SyntaxHighlighter::plain())
    }

    #[test]
    fn test_completes_builtin_names() {
        let names: Vec<String> = helper()
            .complete_command("a")
            .into_iter()
            .map(|p| p.display)
            .collect();
        assert_eq!(names, vec!["alias"]);

        assert_eq!(helper().complete_command("").len(), BUILTINS.len());
        assert!(helper().complete_command("zz").is_empty());
    }

    #[test]
    fn test_completes_paths_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("subfile"), "").unwrap();
        fs::write(dir.path().join("other"), "").unwrap();

        let base = format!("{}/", dir.path().display());
        let matches = helper().complete_path(&format!("{}sub", base));

        let displays: Vec<&str> = matches.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(displays, vec!["subdir/", "subfile"]);
        assert_eq!(matches[0].replacement, format!("{}subdir/", base));
        assert_eq!(matches[1].replacement, format!("{}subfile ", base));
    }

    #[test]
    fn test_missing_directory_completes_nothing() {
        assert!(helper()
            .complete_path("/shoal/no/such/dir/x")
            .is_empty());
    }
}
