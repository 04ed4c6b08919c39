use std::cell::RefCell;
#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Cursor, Read, Write};
use std::rc::Rc;

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use super::completer::ShellHelper;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

enum Input {
    Editor(Box<Editor<ShellHelper, DefaultHistory>>),
    Reader(Box<dyn BufRead>),
    #[cfg(test)]
    Replay(VecDeque<Option<String>>),
}

/// Standard input without any read-ahead, so the bytes after the current
/// line stay in the pipe for a program that line launches.
struct RawStdin;

#[cfg(unix)]
impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }
}

#[cfg(not(unix))]
impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::stdin().read(buf)
    }
}

/// The session's three standard streams.
///
/// Input comes either from a line editor (interactive terminals) or from any
/// buffered reader, in which case the prompt is written to the output stream.
pub struct Console {
    input: Input,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    pub fn interactive(highlighter: SyntaxHighlighter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new(highlighter)));

        Ok(Console {
            input: Input::Editor(Box::new(editor)),
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        })
    }

    /// Reads stdin one byte at a time.
    pub fn piped() -> Self {
        Console::with_reader(
            Box::new(BufReader::with_capacity(1, RawStdin)),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    pub fn with_reader(reader: Box<dyn BufRead>, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Console {
            input: Input::Reader(reader),
            out,
            err,
        }
    }

    /// A console fed from a fixed script, writing into the given buffers.
    pub fn scripted(script: &str, out: SharedBuffer, err: SharedBuffer) -> Self {
        Console::with_reader(
            Box::new(Cursor::new(script.as_bytes().to_vec())),
            Box::new(out),
            Box::new(err),
        )
    }

    /// Replays `entries` as typed lines; `None` stands for Ctrl-C.
    #[cfg(test)]
    pub(crate) fn replay(entries: Vec<Option<&str>>, out: SharedBuffer) -> Self {
        Console {
            input: Input::Replay(
                entries
                    .into_iter()
                    .map(|entry| entry.map(String::from))
                    .collect(),
            ),
            out: Box::new(out),
            err: Box::new(SharedBuffer::new()),
        }
    }

    /// Reads one command line with its terminator stripped and records it in
    /// the editor history.
    ///
    /// End of input is [`ShellError::EndOfInput`]. Ctrl-C at an interactive
    /// prompt discards the partial line and yields an empty one.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        let line = self.read(prompt)?.unwrap_or_default();
        if let Input::Editor(editor) = &mut self.input {
            if !line.trim().is_empty() {
                editor.add_history_entry(line.as_str())?;
            }
        }
        Ok(line)
    }

    /// Reads one answer to a question. Not recorded in history; `None` when
    /// the prompt was interrupted.
    pub fn read_entry(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.read(prompt)
    }

    fn read(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match &mut self.input {
            Input::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(Some(line)),
                Err(ReadlineError::Interrupted) => {
                    log::debug!("prompt interrupted, discarding line");
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            },
            Input::Reader(reader) => {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;

                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Err(ShellError::EndOfInput);
                }
                let len = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(len);
                Ok(Some(line))
            }
            #[cfg(test)]
            Input::Replay(entries) => {
                write!(self.out, "{}", prompt)?;
                entries.pop_front().ok_or(ShellError::EndOfInput)
            }
        }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut self.err
    }
}

/// In-memory writer whose contents stay readable through any clone.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
