//! Tests for argument parsing of every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_index_url() {
    match parse(&["ccwarc", "index-url", "CC-MAIN-2020-05"]) {
        CliCommand::IndexUrl { crawl_id } => assert_eq!(crawl_id, "CC-MAIN-2020-05"),
        _ => panic!("expected IndexUrl"),
    }
}

#[test]
fn cli_parse_list_defaults() {
    match parse(&["ccwarc", "list", "CC-MAIN-2020-05"]) {
        CliCommand::List {
            crawl_id,
            stream,
            limit,
        } => {
            assert_eq!(crawl_id, "CC-MAIN-2020-05");
            assert!(!stream);
            assert!(limit.is_none());
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_stream_and_limit() {
    match parse(&["ccwarc", "list", "CC-MAIN-2020-05", "--stream", "--limit", "10"]) {
        CliCommand::List { stream, limit, .. } => {
            assert!(stream);
            assert_eq!(limit, Some(10));
        }
        _ => panic!("expected List with --stream --limit"),
    }
}

#[test]
fn cli_parse_count() {
    match parse(&["ccwarc", "count", "CC-MAIN-2019-47"]) {
        CliCommand::Count { crawl_id } => assert_eq!(crawl_id, "CC-MAIN-2019-47"),
        _ => panic!("expected Count"),
    }
}

#[test]
fn cli_parse_list_requires_crawl_id() {
    assert!(Cli::try_parse_from(["ccwarc", "list"]).is_err());
}

#[test]
fn cli_parse_limit_must_be_a_number() {
    assert!(Cli::try_parse_from(["ccwarc", "list", "x", "--limit", "many"]).is_err());
}
