use std::io::{BufRead, Write};

use crate::error::ShellError;

/// Source of command lines for the read-eval loop.
pub trait LineReader {
    /// Shows `prompt` and reads one line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Line source over any buffered reader, used when stdin is not a terminal.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub struct BufReadInput<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> BufReadInput<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for BufReadInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_then_eof() -> Result<(), ShellError> {
        let mut prompts = Vec::new();
        let mut reader = BufReadInput::new(Cursor::new("ls -l\r\n\necho hi"), &mut prompts);

        assert_eq!(reader.read_line("> ")?.as_deref(), Some("ls -l"));
        assert_eq!(reader.read_line("> ")?.as_deref(), Some(""));
        assert_eq!(reader.read_line("> ")?.as_deref(), Some("echo hi"));
        assert_eq!(reader.read_line("> ")?, None);
        drop(reader);

        assert_eq!(String::from_utf8_lossy(&prompts), "> > > > ");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_replaced() -> Result<(), ShellError> {
        let input: &[u8] = b"\xff\xfe\nexit\n";
        let mut reader = BufReadInput::new(input, std::io::sink());

        assert_eq!(reader.read_line("")?.as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(reader.read_line("")?.as_deref(), Some("exit"));
        assert_eq!(reader.read_line("")?, None);
        Ok(())
    }
}
