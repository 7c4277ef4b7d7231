//! Reading inputs and opening outputs. A missing path or `-` means the
//! standard stream.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use aupal_compiler::ParseError;

use super::CliError;

/// An AuPaL script read line by line.
///
/// Only the line most recently consumed is kept, which is the line a parse
/// error points at.
pub struct Script<R = Box<dyn BufRead>> {
    /// File path, `None` for stdin.
    path: Option<String>,
    inner: R,
    current: Vec<u8>,
    last: Vec<u8>,
}

impl<R: BufRead> Script<R> {
    pub fn new(path: Option<String>, inner: R) -> Self {
        Self {
            path,
            inner,
            current: Vec::new(),
            last: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.path.as_deref().unwrap_or("<stdin>")
    }

    /// The last line consumed, without its line ending.
    pub fn last_line(&self) -> Cow<'_, str> {
        let bytes = if self.current.is_empty() {
            &self.last
        } else {
            &self.current
        };
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        String::from_utf8_lossy(bytes)
    }

    /// Render `err` with the line it was raised on.
    pub fn render_error(&self, err: &ParseError, colored: bool) -> String {
        err.render(&self.last_line(), Some(self.name()), colored)
    }
}

impl<R: BufRead> Read for Script<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = {
            let buf = self.fill_buf()?;
            let n = buf.len().min(out.len());
            out[..n].copy_from_slice(&buf[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for Script<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        // The buffer is still filled here, so this does no I/O.
        if let Ok(buf) = self.inner.fill_buf() {
            for &byte in &buf[..amt.min(buf.len())] {
                if byte == b'\n' {
                    self.last = std::mem::take(&mut self.current);
                } else {
                    self.current.push(byte);
                }
            }
        }
        self.inner.consume(amt);
    }
}

pub fn open_script(path: Option<&Path>) -> Result<Script, CliError> {
    let Some(path) = stream_path(path) else {
        let stdin: Box<dyn BufRead> = Box::new(io::stdin().lock());
        return Ok(Script::new(None, stdin));
    };
    let file = File::open(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
    Ok(Script::new(Some(path.to_string_lossy().into_owned()), reader))
}

pub fn load_binary(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match stream_path(path) {
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(CliError::Stdin)?;
            Ok(bytes)
        }
        Some(path) => fs::read(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Open the instruction sink. The file is created up front.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match stream_path(path) {
        None => Ok(Box::new(io::stdout().lock())),
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

fn stream_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}
