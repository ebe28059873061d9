//! `ccwarc count` – count the WARC files of a crawl.

use anyhow::{Context, Result};
use ccwarc_core::transport::IndexFetcher;
use ccwarc_core::WarcLocationResolver;
use std::io::Write;

/// Streams the index as URLs so every entry is validated without keeping
/// the whole list in memory.
pub fn run_count<F: IndexFetcher>(
    resolver: &WarcLocationResolver<F>,
    crawl_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut locations = resolver.location_url_stream(crawl_id)?;
    let mut count = 0usize;
    for item in locations.by_ref() {
        item.with_context(|| format!("read WARC locations of {}", crawl_id))?;
        count += 1;
    }
    locations.close()?;
    writeln!(out, "{}", count)?;
    Ok(())
}
