//! Sources of command lines: the terminal or a script file.

use crate::error::ShellError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Split};

/// Prompt shown before every interactive line.
pub const PROMPT: &str = "wish> ";

/// Something that hands out one command line at a time.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, ShellError>;
}

/// Lines typed at a terminal, each preceded by [`PROMPT`].
///
/// Nothing is recorded in the editor's history.
pub struct Interactive {
    editor: DefaultEditor,
}

impl Interactive {
    pub fn new() -> Result<Self, ShellError> {
        let editor = DefaultEditor::new().map_err(|e| ShellError::Input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for Interactive {
    fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => return Ok(Some(line)),
                // Ctrl-C drops the line being typed.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(ShellError::Input(err.to_string())),
            }
        }
    }
}

/// Lines of a script file, read without any prompt.
///
/// Only the `\n` terminator is removed, so a `\r` before it stays part of the line.
pub struct Script {
    path: String,
    lines: Split<BufReader<File>>,
}

impl Script {
    /// Opens the script up front so that a missing file fails before anything runs.
    pub fn open(path: &str) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|source| ShellError::Script {
            path: path.to_string(),
            source,
        })?;
        Ok(Self {
            path: path.to_string(),
            lines: BufReader::new(file).split(b'\n'),
        })
    }
}

impl LineSource for Script {
    fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        self.lines
            .next()
            .transpose()
            .and_then(|line| {
                line.map(|bytes| {
                    String::from_utf8(bytes)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
                })
                .transpose()
            })
            .map_err(|source| ShellError::Script {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn script_yields_lines_then_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.wish");
        fs::write(&path, "echo one\n\npath /bin /usr/bin\r\nexit").unwrap();

        let mut script = Script::open(path.to_str().unwrap()).unwrap();
        let mut lines = Vec::new();
        while let Some(line) = script.next_line().unwrap() {
            lines.push(line);
        }

        assert_eq!(lines, vec!["echo one", "", "path /bin /usr/bin\r", "exit"]);
    }

    #[test]
    fn carriage_return_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.wish");
        fs::write(&path, "exit\r\n").unwrap();

        let mut script = Script::open(path.to_str().unwrap()).unwrap();
        assert_eq!(script.next_line().unwrap().as_deref(), Some("exit\r"));
        assert_eq!(script.next_line().unwrap(), None);
    }

    #[test]
    fn missing_script_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.wish");

        let res = Script::open(path.to_str().unwrap());
        assert!(matches!(res, Err(ShellError::Script { .. })));
    }

    #[test]
    fn invalid_utf8_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.wish");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let mut script = Script::open(path.to_str().unwrap()).unwrap();
        assert!(script.next_line().is_err());
    }
}
