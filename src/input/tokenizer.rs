use std::iter::FusedIterator;

use crate::error::ShellError;

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n')
}

/// Lazy iterator over the tokens of one line.
///
/// Clone it to walk the same line again.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(is_delimiter);
        if start.is_empty() {
            self.rest = start;
            return None;
        }

        let end = start.find(is_delimiter).unwrap_or(start.len());
        let (token, rest) = start.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}

/// Collects the tokens of `line`, failing once more than `capacity` are seen.
pub fn tokenize(line: &str, capacity: usize) -> Result<Vec<&str>, ShellError> {
    let mut collected = Vec::new();
    for token in tokens(line) {
        if collected.len() == capacity {
            return Err(ShellError::TokenOverflow { capacity });
        }
        collected.push(token);
    }
    Ok(collected)
}
