use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Log debug diagnostics to stderr"),
        );
        flags.insert(
            "no-color".to_string(),
            Flag::switch("-n", "--no-color", "Disable colored output"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let matched = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long);

            match matched {
                Some(flag) => flag.value = Some("true".to_string()),
                None if arg.starts_with('-') => {
                    return Err(ShellError::FlagError(format!("unknown flag {}", arg)));
                }
                None => log::debug!("ignoring argument {}", arg),
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    /// Whether output to a stream may carry color codes.
    pub fn color_for(&self, stream_is_terminal: bool) -> bool {
        stream_is_terminal && !self.is_set("no-color")
    }

    pub fn print_help(&self) {
        println!("Usage: shoal [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
