//! Network access for the index file.
//!
//! The resolver only depends on [`IndexFetcher`] and [`IndexBody`]; the
//! libcurl implementation lives in [`CurlFetcher`]. Tests plug in in-memory
//! fetchers through the same seam.

mod fetcher;
mod handler;

use std::io::Read;

use crate::error::TransportError;

pub use fetcher::{CurlBody, CurlFetcher};

/// Opens a readable byte stream for a fully qualified URL.
pub trait IndexFetcher {
    type Body: IndexBody;

    /// Starts fetching `url`. Implementations may defer network errors to the
    /// first read; a failure reported through `Read` must be wrapped with
    /// [`TransportError::into_io`] so it is not mistaken for bad gzip data.
    fn open(&self, url: &str) -> Result<Self::Body, TransportError>;
}

/// An open response body. Dropping it releases the connection silently;
/// [`IndexBody::close`] releases it and reports failure.
pub trait IndexBody: Read {
    fn close(self) -> Result<(), TransportError>;
}
