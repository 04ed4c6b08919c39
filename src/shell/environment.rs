//! `$NAME` tokens are recognised but not substituted; they reach the command
//! exactly as typed.

pub fn is_env_reference(token: &str) -> bool {
    token.starts_with('$')
}

/// Logs any `$` references in `tokens`. The tokens themselves are unchanged.
pub fn note_env_references(tokens: &[&str]) {
    for token in tokens.iter().filter(|t| is_env_reference(t)) {
        log::debug!("substitution is not supported, passing {} through", token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_leading_dollar_only() {
        assert!(is_env_reference("$HOME"));
        assert!(is_env_reference("$"));
        assert!(!is_env_reference("a$b"));
        assert!(!is_env_reference("HOME"));
    }
}
