use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Where lines come from.
pub enum Input {
    /// A terminal on stdin; `rustyline` draws the prompt.
    Terminal {
        editor: DefaultEditor,
        prompt: String,
    },
    /// Interactive mode on a piped stdin; the prompt is written by hand.
    Prompted {
        reader: Box<dyn BufRead>,
        prompt: String,
    },
    /// A batch source, read without prompting.
    Batch(Box<dyn BufRead>),
}

impl Input {
    pub fn interactive(prompt: impl Into<String>) -> Result<Self, ShellError> {
        let prompt = prompt.into();
        if io::stdin().is_terminal() {
            Ok(Input::Terminal {
                editor: DefaultEditor::new()?,
                prompt,
            })
        } else {
            Ok(Input::Prompted {
                reader: Box::new(io::stdin().lock()),
                prompt,
            })
        }
    }

    pub fn batch_file(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|source| ShellError::BatchFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Input::Batch(Box::new(reader))
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self, Input::Batch(_))
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        match self {
            Input::Terminal { editor, prompt } => match editor.readline(prompt) {
                Ok(line) => Ok(Some(line)),
                // No signal handling: an interrupted read is just an empty line.
                Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
                Err(ReadlineError::Eof) => Ok(None),
                Err(e) => Err(e.into()),
            },
            Input::Prompted { reader, prompt } => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                read_lossy(reader.as_mut())
            }
            Input::Batch(reader) => read_lossy(reader.as_mut()),
        }
    }
}

/// Reads one line, replacing invalid UTF-8 rather than failing on it.
fn read_lossy(reader: &mut dyn BufRead) -> Result<Option<String>, ShellError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_batch_lines() {
        let mut input = Input::from_reader(Cursor::new("ls -l\n\npwd"));

        assert!(!input.is_interactive());
        assert_eq!(input.read_line().unwrap().as_deref(), Some("ls -l"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("pwd"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut input = Input::from_reader(Cursor::new(b"echo \xff\xfe\necho after\n".to_vec()));

        assert_eq!(
            input.read_line().unwrap().as_deref(),
            Some("echo \u{fffd}\u{fffd}")
        );
        assert_eq!(input.read_line().unwrap().as_deref(), Some("echo after"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_missing_batch_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Input::batch_file(&dir.path().join("missing"));
        assert!(matches!(result, Err(ShellError::BatchFile { .. })));
    }
}
