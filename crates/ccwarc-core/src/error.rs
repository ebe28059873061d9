//! Error types for index fetching and location resolution.

use std::io;

/// Failure of the network layer that fetches the index file.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Curl reported an error (DNS, connection refused, timeout, TLS, ...).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// The curl multi stack failed while driving or detaching a transfer.
    #[error("curl multi: {0}")]
    Multi(#[from] curl::MultiError),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Any other I/O failure reported by a fetcher.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl TransportError {
    /// Wraps the error so it can travel through `Read` (and the gzip decoder)
    /// and be recovered with [`TransportError::from_io`].
    pub fn into_io(self) -> io::Error {
        io::Error::new(io::ErrorKind::Other, self)
    }

    /// Recovers a transport error previously wrapped by [`TransportError::into_io`].
    /// Returns the original `io::Error` unchanged if it carries something else.
    pub fn from_io(err: io::Error) -> Result<TransportError, io::Error> {
        let is_transport = err
            .get_ref()
            .map(|inner| inner.is::<TransportError>())
            .unwrap_or(false);
        if !is_transport {
            return Err(err);
        }
        match err.into_inner() {
            Some(inner) => inner
                .downcast::<TransportError>()
                .map(|t| *t)
                .map_err(|inner| io::Error::new(io::ErrorKind::Other, inner)),
            None => Err(io::Error::new(io::ErrorKind::Other, "transport error")),
        }
    }
}

/// Error surfaced by a resolution call. None of these are retried; each one
/// ends the call (or the lazy stream) that produced it.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Caller passed an unusable crawl id. Raised before any network access.
    #[error("invalid crawl id: {0}")]
    InvalidArgument(&'static str),

    /// The index could not be fetched, or the connection failed mid-stream.
    #[error("unable to load WARC file paths from {url}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The fetched bytes are not a valid (or complete) gzip stream.
    #[error("unable to decompress WARC file paths from {url}")]
    Decompression {
        url: String,
        #[source]
        source: io::Error,
    },

    /// A path fragment did not produce a usable location. The index is
    /// expected to never contain such lines, so this signals corrupt data.
    #[error("unable to convert WARC url: {location} ({reason})")]
    MalformedLocation { location: String, reason: String },

    /// Releasing the index stream failed, even if every line was consumed.
    #[error("unable to release WARC file paths stream for {url}")]
    Release {
        url: String,
        #[source]
        source: TransportError,
    },
}
