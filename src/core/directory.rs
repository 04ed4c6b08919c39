use std::env;
use std::fmt;
use std::io;
use std::path::Path;

#[cfg(unix)]
pub const MAX_PATH_LEN: usize = libc::PATH_MAX as usize;
#[cfg(not(unix))]
pub const MAX_PATH_LEN: usize = 260;

/// Cached copy of the process working directory.
///
/// Only [`refresh`](Self::refresh) writes the cache, so it keeps the last
/// directory the OS reported even if a later change fails.
#[derive(Debug)]
pub struct DirectoryTracker {
    buf: String,
}

impl Default for DirectoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTracker {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(MAX_PATH_LEN),
        }
    }

    pub fn refresh(&mut self) -> io::Result<()> {
        let dir = env::current_dir()?;
        let dir = dir.to_string_lossy();
        if dir.len() > MAX_PATH_LEN {
            return Err(io::Error::other(format!(
                "working directory is longer than {} bytes",
                MAX_PATH_LEN
            )));
        }

        self.buf.clear();
        self.buf.push_str(&dir);
        log::debug!("working directory is {}", self.buf);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.buf)
    }
}

impl fmt::Display for DirectoryTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
