//! `ccwarc index-url` – print the index location of a crawl.

use anyhow::Result;
use ccwarc_core::CrawlId;
use std::io::Write;

pub fn run_index_url(crawl_id: &str, out: &mut impl Write) -> Result<()> {
    let id = CrawlId::new(crawl_id)?;
    writeln!(out, "{}", id.index_location())?;
    Ok(())
}
