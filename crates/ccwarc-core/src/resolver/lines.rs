//! Splits the decompressed index into path fragments.

use std::io::{self, BufRead};
use std::mem;

use crate::error::{ResolveError, TransportError};

/// Iterator over the lines of a `warc.paths` stream.
///
/// A line ends at `\n`, `\r` or `\r\n`. Nothing else is trimmed. Bytes that
/// are not valid UTF-8 become U+FFFD. Read errors are classified: a wrapped
/// [`TransportError`] stays a transport failure, everything else coming out of
/// the decoder is treated as corrupt gzip data.
pub struct PathLines<R> {
    reader: R,
    url: String,
    line: usize,
    buf: Vec<u8>,
    // Previous line ended with `\r`; a `\n` right after it belongs to that line.
    skip_lf: bool,
}

impl<R: BufRead> PathLines<R> {
    pub fn new(reader: R, url: impl Into<String>) -> Self {
        Self {
            reader,
            url: url.into(),
            line: 0,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    /// Number of lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_error(&self, err: io::Error) -> ResolveError {
        match TransportError::from_io(err) {
            Ok(source) => ResolveError::Transport {
                url: self.url.clone(),
                source,
            },
            Err(source) => ResolveError::Decompression {
                url: self.url.clone(),
                source,
            },
        }
    }

    /// Reads the next line into `buf` without its terminator. Returns `false`
    /// at end of data.
    fn read_line(&mut self) -> io::Result<bool> {
        if mem::take(&mut self.skip_lf) && self.reader.fill_buf()?.first() == Some(&b'\n') {
            self.reader.consume(1);
        }
        let mut read_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(read_any);
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let cr = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    self.skip_lf = cr;
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    read_any = true;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for PathLines<R> {
    type Item = Result<String, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.read_line() {
            Ok(false) => None,
            Ok(true) => {
                self.line += 1;
                let line = match String::from_utf8(mem::take(&mut self.buf)) {
                    Ok(s) => s,
                    Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
                };
                Some(Ok(line))
            }
            Err(e) => Some(Err(self.read_error(e))),
        }
    }
}
