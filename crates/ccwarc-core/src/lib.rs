//! Resolve Common Crawl crawl ids into the locations of their WARC files.
//!
//! ```no_run
//! use ccwarc_core::config::TransportConfig;
//! use ccwarc_core::WarcLocationResolver;
//!
//! let resolver = WarcLocationResolver::from_config(&TransportConfig::default());
//! for location in resolver.location_strings("CC-MAIN-2020-05")? {
//!     println!("{}", location);
//! }
//! # Ok::<(), ccwarc_core::ResolveError>(())
//! ```

pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod resolver;
pub mod transport;

pub use error::{ResolveError, TransportError};
pub use location::{CrawlId, COMMON_CRAWL_ORIGIN};
pub use resolver::{LocationStream, WarcLocationResolver};
