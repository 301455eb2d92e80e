//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors shared through `SourceParams`
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use packtrie_format::ByteOrder;
use packtrie_query::Verbosity;

use super::ColorChoice;
use crate::commands::chars::CharsArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::info::InfoArgs;
use crate::commands::list::ListArgs;
use crate::commands::loader::TrieSource;
use crate::commands::search::SearchArgs;
use crate::commands::trace::TraceArgs;

/// Loading flags every command accepts.
pub struct SourceParams {
    pub file: PathBuf,
    pub offset: usize,
    pub order: ByteOrder,
    pub color: ColorChoice,
}

impl SourceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m
                .get_one::<PathBuf>("file")
                .cloned()
                .expect("clap enforces FILE"),
            offset: m.get_one::<usize>("offset").copied().unwrap_or(0),
            order: m
                .get_one::<String>("endian")
                .and_then(|name| ByteOrder::from_name(name))
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }

    fn trie_source(&self) -> TrieSource {
        TrieSource {
            path: self.file.clone(),
            offset: self.offset,
            order: self.order,
        }
    }
}

pub struct InfoParams {
    pub source: SourceParams,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            source: p.source.trie_source(),
            color: p.source.color.should_colorize(),
        }
    }
}

pub struct SearchParams {
    pub source: SourceParams,
    pub term: String,
    pub limit: usize,
    pub json: bool,
}

impl SearchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            term: m.get_one::<String>("term").cloned().unwrap_or_default(),
            limit: m.get_one::<usize>("limit").copied().unwrap_or(10),
            json: m.get_flag("json"),
        }
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(p: SearchParams) -> Self {
        Self {
            source: p.source.trie_source(),
            term: p.term,
            limit: p.limit,
            json: p.json,
            color: p.source.color.should_colorize(),
        }
    }
}

pub struct ListParams {
    pub source: SourceParams,
    pub prefix: Option<String>,
    pub skip: usize,
    pub limit: Option<usize>,
    pub json: bool,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            prefix: m.get_one::<String>("prefix").cloned(),
            skip: m.get_one::<usize>("skip").copied().unwrap_or(0),
            limit: m.get_one::<usize>("limit").copied(),
            json: m.get_flag("json"),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            source: p.source.trie_source(),
            prefix: p.prefix,
            skip: p.skip,
            limit: p.limit,
            json: p.json,
            color: p.source.color.should_colorize(),
        }
    }
}

pub struct CharsParams {
    pub source: SourceParams,
    pub prefix: Option<String>,
}

impl CharsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            prefix: m.get_one::<String>("prefix").cloned(),
        }
    }
}

impl From<CharsParams> for CharsArgs {
    fn from(p: CharsParams) -> Self {
        Self {
            source: p.source.trie_source(),
            prefix: p.prefix,
        }
    }
}

pub struct DumpParams {
    pub source: SourceParams,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source: p.source.trie_source(),
            color: p.source.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub source: SourceParams,
    pub term: Option<String>,
    pub limit: usize,
    pub verbose: u8,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            term: m.get_one::<String>("term").cloned(),
            limit: m.get_one::<usize>("limit").copied().unwrap_or(1),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            source: p.source.trie_source(),
            term: p.term,
            limit: p.limit,
            verbosity: if p.verbose > 0 {
                Verbosity::Verbose
            } else {
                Verbosity::Default
            },
            color: p.source.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
