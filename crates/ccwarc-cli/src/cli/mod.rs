//! CLI for the ccwarc WARC location resolver.

mod commands;

use anyhow::Result;
use ccwarc_core::config::{self, CcwarcConfig};
use ccwarc_core::WarcLocationResolver;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use commands::{run_count, run_index_url, run_list};

/// Top-level CLI for ccwarc.
#[derive(Debug, Parser)]
#[command(name = "ccwarc")]
#[command(about = "Resolve Common Crawl crawl ids into WARC file locations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the warc.paths.gz location of a crawl (no network access).
    IndexUrl {
        /// Crawl id, e.g. CC-MAIN-2020-05.
        crawl_id: String,
    },

    /// Print the WARC file locations of a crawl, one per line.
    List {
        /// Crawl id, e.g. CC-MAIN-2020-05.
        crawl_id: String,
        /// Print locations as they are read instead of collecting them first.
        #[arg(long)]
        stream: bool,
        /// Stop after N locations (implies --stream).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Count the WARC files of a crawl, validating every location as a URL.
    Count {
        /// Crawl id, e.g. CC-MAIN-2020-05.
        crawl_id: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.command.run(config::load_or_init, &mut out)?;
        out.flush()?;

        Ok(())
    }

    /// Runs the command, writing its output to `out`. The config is only
    /// loaded by commands that fetch the index.
    pub fn run(
        self,
        load_config: impl FnOnce() -> Result<CcwarcConfig>,
        out: &mut impl Write,
    ) -> Result<()> {
        let resolver = || -> Result<WarcLocationResolver> {
            let cfg = load_config()?;
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(WarcLocationResolver::from_config(&cfg.transport))
        };
        match self {
            CliCommand::IndexUrl { crawl_id } => run_index_url(&crawl_id, out),
            CliCommand::List {
                crawl_id,
                stream,
                limit,
            } => run_list(&resolver()?, &crawl_id, stream, limit, out),
            CliCommand::Count { crawl_id } => run_count(&resolver()?, &crawl_id, out),
        }
    }
}

#[cfg(test)]
mod tests;
