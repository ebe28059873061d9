//! Turns a crawl id into the locations of the crawl's WARC files.
//!
//! The index `crawl-data/<id>/warc.paths.gz` is fetched, gunzipped while it
//! is read and split into lines; every line is prefixed with
//! [`COMMON_CRAWL_ORIGIN`](crate::location::COMMON_CRAWL_ORIGIN). Results come
//! either as an owned `Vec` or as a [`LocationStream`] the caller drains.

mod lines;
mod stream;

use url::Url;

use crate::config::TransportConfig;
use crate::error::ResolveError;
use crate::location::{CrawlId, Location};
use crate::transport::{CurlFetcher, IndexFetcher};

pub use lines::PathLines;
pub use stream::LocationStream;

/// Stateless resolver; each call opens its own index stream, so a shared
/// instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct WarcLocationResolver<F = CurlFetcher> {
    fetcher: F,
}

impl WarcLocationResolver<CurlFetcher> {
    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(CurlFetcher::new(config.clone()))
    }
}

impl<F: IndexFetcher> WarcLocationResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// All WARC locations of `crawl_id` as URLs. Fails on the first line
    /// that does not form a valid URL.
    pub fn location_urls(&self, crawl_id: &str) -> Result<Vec<Url>, ResolveError> {
        self.collect(crawl_id)
    }

    /// Lazy variant of [`location_urls`](Self::location_urls). Each malformed
    /// line surfaces as its own `Err` when reached.
    pub fn location_url_stream(
        &self,
        crawl_id: &str,
    ) -> Result<LocationStream<'_, F, Url>, ResolveError> {
        self.stream(crawl_id)
    }

    /// All WARC locations of `crawl_id` as plain strings.
    pub fn location_strings(&self, crawl_id: &str) -> Result<Vec<String>, ResolveError> {
        self.collect(crawl_id)
    }

    /// Lazy variant of [`location_strings`](Self::location_strings).
    pub fn location_string_stream(
        &self,
        crawl_id: &str,
    ) -> Result<LocationStream<'_, F, String>, ResolveError> {
        self.stream(crawl_id)
    }

    /// Validates the id and prepares the stream. No network access happens
    /// here; the index is requested on the first `next()`.
    fn stream<T: Location>(&self, crawl_id: &str) -> Result<LocationStream<'_, F, T>, ResolveError> {
        let id = CrawlId::new(crawl_id)?;
        Ok(LocationStream::new(&self.fetcher, id.index_location()))
    }

    fn collect<T: Location>(&self, crawl_id: &str) -> Result<Vec<T>, ResolveError> {
        let mut stream = self.stream::<T>(crawl_id)?;
        let mut locations = Vec::new();
        for item in stream.by_ref() {
            locations.push(item?);
        }
        stream.close()?;
        tracing::debug!("resolved {} WARC locations for {}", locations.len(), crawl_id);
        Ok(locations)
    }
}
