use inksac::prelude::*;

use crate::core::commands::Builtin;
use crate::shell::environment::is_env_reference;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl SyntaxHighlighter {
    /// Colors when the terminal supports them and `enabled` is set.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    #[cfg(test)]
    pub(crate) fn basic() -> Self {
        Self {
            color_support: ColorSupport::Basic,
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Styles an input line without changing its width: builtin names are
    /// cyan, other programs green, flags yellow and `$` references grey.
    pub fn highlight_command(&self, input: &str) -> String {
        if self.is_plain() {
            return input.to_string();
        }

        let mut seen_command = false;
        let parts: Vec<String> = input
            .split(' ')
            .map(|part| {
                if part.is_empty() {
                    return String::new();
                }
                let style = if !seen_command {
                    seen_command = true;
                    if Builtin::lookup(part).is_some() {
                        Style::builder().foreground(Color::Cyan).bold().build()
                    } else {
                        Style::builder().foreground(Color::Green).build()
                    }
                } else if part.starts_with('-') {
                    Style::builder().foreground(Color::Yellow).build()
                } else if is_env_reference(part) {
                    Style::builder().foreground(Color::RGB(128, 128, 128)).build()
                } else {
                    return part.to_string();
                };
                part.style(style).to_string()
            })
            .collect();

        parts.join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_banner(&self, banner: &str) -> String {
        if self.is_plain() {
            return banner.to_string();
        }

        let banner_style = Style::builder().foreground(Color::Cyan).build();
        banner.style(banner_style).to_string()
    }

    pub fn highlight_name(&self, name: &str) -> String {
        if self.is_plain() {
            return name.to_string();
        }

        let name_style = Style::builder().foreground(Color::Green).bold().build();
        name.style(name_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.is_plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
