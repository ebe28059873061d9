//! Crawl ids, index locations and resolved WARC locations.
//!
//! Every location handed out by this crate is the fixed Common Crawl origin
//! followed by either `crawl-data/<id>/warc.paths.gz` (the index) or one line
//! of that index, concatenated as-is.

use std::fmt;

use url::Url;

use crate::error::ResolveError;

/// Origin every index and WARC location is built from.
pub const COMMON_CRAWL_ORIGIN: &str = "https://commoncrawl.s3.amazonaws.com/";

const CRAWL_DATA_SEGMENT: &str = "crawl-data/";
const INDEX_FILE_NAME: &str = "/warc.paths.gz";

/// A validated Common Crawl crawl id (e.g. `CC-MAIN-2020-05`).
///
/// The id is opaque: only emptiness is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrawlId(String);

impl CrawlId {
    pub fn new(id: &str) -> Result<Self, ResolveError> {
        if id.is_empty() {
            return Err(ResolveError::InvalidArgument("crawl id must not be empty"));
        }
        Ok(Self(id.to_string()))
    }

    /// URL of the gzip-compressed list of WARC paths for this crawl.
    pub fn index_location(&self) -> String {
        let mut location = String::with_capacity(
            COMMON_CRAWL_ORIGIN.len()
                + CRAWL_DATA_SEGMENT.len()
                + self.0.len()
                + INDEX_FILE_NAME.len(),
        );
        location.push_str(COMMON_CRAWL_ORIGIN);
        location.push_str(CRAWL_DATA_SEGMENT);
        location.push_str(&self.0);
        location.push_str(INDEX_FILE_NAME);
        location
    }
}

impl fmt::Display for CrawlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefixes one index line with [`COMMON_CRAWL_ORIGIN`].
///
/// No trimming or escaping is applied. An empty fragment would resolve to the
/// bare origin, which is never a WARC file, so it is rejected.
pub fn resolve_location(fragment: &str) -> Result<String, ResolveError> {
    if fragment.is_empty() {
        return Err(ResolveError::MalformedLocation {
            location: COMMON_CRAWL_ORIGIN.to_string(),
            reason: "empty path fragment".to_string(),
        });
    }
    let mut location = String::with_capacity(COMMON_CRAWL_ORIGIN.len() + fragment.len());
    location.push_str(COMMON_CRAWL_ORIGIN);
    location.push_str(fragment);
    Ok(location)
}

/// Parses a resolved location into a [`Url`].
pub fn parse_location(location: String) -> Result<Url, ResolveError> {
    Url::parse(&location).map_err(|e| ResolveError::MalformedLocation {
        reason: e.to_string(),
        location,
    })
}

/// Output type of a resolution: how a resolved location string is turned
/// into the value handed to the caller.
pub trait Location: Sized {
    fn from_resolved(location: String) -> Result<Self, ResolveError>;
}

impl Location for String {
    fn from_resolved(location: String) -> Result<Self, ResolveError> {
        Ok(location)
    }
}

impl Location for Url {
    fn from_resolved(location: String) -> Result<Self, ResolveError> {
        parse_location(location)
    }
}
