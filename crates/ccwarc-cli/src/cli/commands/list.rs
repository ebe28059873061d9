//! `ccwarc list` – print the WARC locations of a crawl.

use anyhow::{Context, Result};
use ccwarc_core::transport::IndexFetcher;
use ccwarc_core::WarcLocationResolver;
use std::io::Write;

pub fn run_list<F: IndexFetcher>(
    resolver: &WarcLocationResolver<F>,
    crawl_id: &str,
    stream: bool,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    if !stream && limit.is_none() {
        let locations = resolver
            .location_strings(crawl_id)
            .with_context(|| format!("resolve WARC locations of {}", crawl_id))?;
        for location in &locations {
            writeln!(out, "{}", location)?;
        }
        tracing::info!("listed {} locations for {}", locations.len(), crawl_id);
        return Ok(());
    }

    let mut locations = resolver.location_string_stream(crawl_id)?;
    let limit = limit.unwrap_or(usize::MAX);
    let mut printed = 0usize;
    while printed < limit {
        let location = match locations.next() {
            Some(item) => item.with_context(|| format!("read WARC locations of {}", crawl_id))?,
            None => break,
        };
        writeln!(out, "{}", location)?;
        printed += 1;
    }
    locations
        .close()
        .with_context(|| format!("release index of {}", crawl_id))?;
    tracing::info!("streamed {} locations for {}", printed, crawl_id);
    Ok(())
}
