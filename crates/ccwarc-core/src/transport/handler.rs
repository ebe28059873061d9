//! Easy2 Handler that buffers the response body for a pull-based reader.
//! Tracks the final HTTP status and pauses the transfer when the reader falls behind.

use std::collections::VecDeque;
use std::str;

use curl::easy::{Handler, WriteError};

pub(super) struct BodyHandler {
    buffer: VecDeque<u8>,
    limit: usize,
    /// Status of the latest response (redirect hops overwrite it).
    status: Option<u32>,
    /// True once `write` returned `Pause`; the reader must unpause after draining.
    pub(super) paused: bool,
    pub(super) received: u64,
}

impl BodyHandler {
    pub(super) fn new(limit: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            limit: limit.max(1),
            status: None,
            paused: false,
            received: 0,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Moves buffered bytes into `buf`; returns how many were copied.
    pub(super) fn drain_into(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.buffer.len());
        for (dst, src) in buf.iter_mut().zip(self.buffer.drain(..n)) {
            *dst = src;
        }
        n
    }

    /// The final status if it is not 2xx. Non-HTTP transfers report none.
    pub(super) fn failed_status(&self) -> Option<u32> {
        match self.status {
            Some(code) if !(200..300).contains(&code) => Some(code),
            _ => None,
        }
    }
}

/// Parses the status code out of an HTTP status line such as `HTTP/1.1 404 Not Found`.
pub(super) fn parse_status_line(line: &str) -> Option<u32> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}

impl Handler for BodyHandler {
    fn header(&mut self, data: &[u8]) -> bool {
        if let Ok(s) = str::from_utf8(data) {
            if let Some(code) = parse_status_line(s.trim_end()) {
                self.status = Some(code);
            }
        }
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        // An error page is not index data; abort the transfer.
        if self.failed_status().is_some() {
            return Ok(0);
        }
        if self.buffer.len() >= self.limit {
            self.paused = true;
            return Err(WriteError::Pause);
        }
        self.buffer.extend(data);
        self.received += data.len() as u64;
        Ok(data.len())
    }
}
