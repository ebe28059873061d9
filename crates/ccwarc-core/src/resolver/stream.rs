//! Lazy, resource-owning sequence of resolved locations.

use std::io::BufReader;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use flate2::read::MultiGzDecoder;

use crate::error::ResolveError;
use crate::location::{resolve_location, Location};
use crate::transport::{IndexBody, IndexFetcher};

use super::lines::PathLines;

type IndexLines<B> = PathLines<BufReader<MultiGzDecoder<B>>>;

enum State<B> {
    /// Index not requested yet; the fetch happens on the first `next()`.
    Pending,
    Open(IndexLines<B>),
    Done,
}

/// Locations of one crawl, produced line by line from an open index stream.
///
/// The stream owns the connection. It is released automatically when the
/// last line has been read; a caller that stops earlier must call
/// [`LocationStream::close`] (or drop the stream, which releases it without
/// reporting failures).
///
/// A malformed line (empty fragment, invalid URL, invalid UTF-8) yields one
/// `Err` and iteration may continue. Transport, decompression and release
/// failures end the stream.
pub struct LocationStream<'a, F: IndexFetcher, T> {
    fetcher: &'a F,
    index: String,
    state: State<F::Body>,
    emitted: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, F: IndexFetcher, T: Location> LocationStream<'a, F, T> {
    pub(super) fn new(fetcher: &'a F, index: String) -> Self {
        Self {
            fetcher,
            index,
            state: State::Pending,
            emitted: 0,
            _marker: PhantomData,
        }
    }

    /// The index file this stream reads from.
    pub fn index_location(&self) -> &str {
        &self.index
    }

    /// Number of items (including per-line errors) produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Releases the underlying connection. Safe on streams that were never
    /// read, already drained, or ended by an error.
    pub fn close(mut self) -> Result<(), ResolveError> {
        self.finish()
    }

    fn open(&mut self) -> Result<(), ResolveError> {
        match self.fetcher.open(&self.index) {
            Ok(body) => {
                let reader = BufReader::new(MultiGzDecoder::new(body));
                self.state = State::Open(PathLines::new(reader, self.index.as_str()));
                Ok(())
            }
            Err(source) => {
                self.state = State::Done;
                tracing::warn!("unable to open {}: {}", self.index, source);
                Err(ResolveError::Transport {
                    url: self.index.clone(),
                    source,
                })
            }
        }
    }

    fn finish(&mut self) -> Result<(), ResolveError> {
        if let State::Open(lines) = mem::replace(&mut self.state, State::Done) {
            let read = lines.line();
            let body = lines.into_inner().into_inner().into_inner();
            body.close().map_err(|source| {
                tracing::warn!("unable to release {}: {}", self.index, source);
                ResolveError::Release {
                    url: self.index.clone(),
                    source,
                }
            })?;
            tracing::debug!("released {} after {} lines", self.index, read);
        }
        Ok(())
    }
}

/// Errors scoped to a single line; the stream stays usable after them.
fn is_line_error(err: &ResolveError) -> bool {
    matches!(err, ResolveError::MalformedLocation { .. })
}

impl<'a, F: IndexFetcher, T: Location> Iterator for LocationStream<'a, F, T> {
    type Item = Result<T, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Pending) {
            if let Err(e) = self.open() {
                return Some(Err(e));
            }
        }

        let next = match &mut self.state {
            State::Open(lines) => lines.next(),
            _ => return None,
        };

        match next {
            Some(Ok(fragment)) => {
                self.emitted += 1;
                Some(resolve_location(&fragment).and_then(T::from_resolved))
            }
            Some(Err(e)) => {
                if is_line_error(&e) {
                    self.emitted += 1;
                } else {
                    // Dropping the body releases it; the read error is the one to report.
                    self.state = State::Done;
                }
                Some(Err(e))
            }
            None => self.finish().err().map(Err),
        }
    }
}

impl<'a, F: IndexFetcher, T: Location> FusedIterator for LocationStream<'a, F, T> {}
