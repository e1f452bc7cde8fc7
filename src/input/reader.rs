use std::io::{self, BufRead, BufReader, Read};

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use crate::error::ShellError;
use crate::input::ShellCompleter;

/// One physical line from whichever source drives the session.
pub enum ReadOutcome {
    Line(String),
    /// Interactive interrupt; aborts only the current read.
    Interrupted,
    EndOfInput,
}

/// Input source for the dispatch loop: a rustyline editor on a terminal, or
/// a plain buffered reader for pipes and script files.
pub enum LineReader {
    Interactive(Box<Editor<ShellCompleter, FileHistory>>),
    Buffered(BufReader<Box<dyn Read>>),
}

impl LineReader {
    pub fn interactive(completer: ShellCompleter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);
        Ok(LineReader::Interactive(Box::new(editor)))
    }

    pub fn stdin() -> Self {
        LineReader::Buffered(BufReader::new(Box::new(io::stdin())))
    }

    pub fn buffered(source: Box<dyn Read>) -> Self {
        LineReader::Buffered(BufReader::new(source))
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, LineReader::Interactive(_))
    }

    /// Blocking read of the next line. A read that fails with an I/O error
    /// is end-of-input; there is no retry.
    pub fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self {
            LineReader::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => ReadOutcome::Line(line),
                Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
                Err(_) => ReadOutcome::EndOfInput,
            },
            LineReader::Buffered(reader) => {
                let mut buf = String::new();
                match reader.read_line(&mut buf) {
                    Ok(0) | Err(_) => ReadOutcome::EndOfInput,
                    Ok(_) => {
                        while buf.ends_with('\n') || buf.ends_with('\r') {
                            buf.pop();
                        }
                        ReadOutcome::Line(buf)
                    }
                }
            }
        }
    }

    /// Pushes session state the completer needs into the editor helper.
    pub fn sync_aliases<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        if let LineReader::Interactive(editor) = self {
            if let Some(helper) = editor.helper_mut() {
                helper.update_aliases(names);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(input: &str) -> LineReader {
        LineReader::buffered(Box::new(io::Cursor::new(input.as_bytes().to_vec())))
    }

    fn next_line(reader: &mut LineReader) -> Option<String> {
        match reader.read_line("") {
            ReadOutcome::Line(line) => Some(line),
            _ => None,
        }
    }

    #[test]
    fn test_buffered_lines_in_order() {
        let mut reader = scripted("one\ntwo\n");
        assert_eq!(next_line(&mut reader).unwrap(), "one");
        assert_eq!(next_line(&mut reader).unwrap(), "two");
        assert!(matches!(reader.read_line(""), ReadOutcome::EndOfInput));
    }

    #[test]
    fn test_crlf_stripped() {
        let mut reader = scripted("dir\r\n");
        assert_eq!(next_line(&mut reader).unwrap(), "dir");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = scripted("tail");
        assert_eq!(next_line(&mut reader).unwrap(), "tail");
        assert!(matches!(reader.read_line(""), ReadOutcome::EndOfInput));
    }

    #[test]
    fn test_buffered_is_not_interactive() {
        assert!(!scripted("").is_interactive());
    }
}
