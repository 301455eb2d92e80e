//! Enumerate value-bearing keys.

use packtrie_format::Colors;
use packtrie_query::{Cursor, Query};

use super::error::CliError;
use super::loader::{TrieSource, load_trie, require_key};
use super::or_exit;
use super::output::{format_entry, push_json};

pub struct ListArgs {
    pub source: TrieSource,
    pub prefix: Option<String>,
    pub skip: usize,
    pub limit: Option<usize>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ListArgs) {
    let trie = or_exit(load_trie(&args.source));
    let query = Query::new(&trie);
    let out = or_exit(render(
        &query,
        args.prefix.as_deref(),
        args.skip,
        args.limit,
        args.json,
        Colors::new(args.color),
    ));
    print!("{}", out);
}

/// Render the selected entries.
///
/// With a prefix, the listing is the prefix itself (when it carries a value)
/// followed by everything below it. An empty prefix lists the whole trie.
pub fn render(
    query: &Query<'_>,
    prefix: Option<&str>,
    skip: usize,
    limit: Option<usize>,
    json: bool,
    colors: Colors,
) -> Result<String, CliError> {
    let prefix = prefix.filter(|p| !p.is_empty());
    let entries: Box<dyn Iterator<Item = Cursor<'_>> + '_> = match prefix {
        None => Box::new(query.entries()),
        Some(prefix) => {
            let start = require_key(query, prefix)?;
            let descendants = start.descendants();
            let own = start.is_leaf().then_some(start);
            Box::new(own.into_iter().chain(descendants))
        }
    };

    let mut out = String::new();
    for cursor in entries.skip(skip).take(limit.unwrap_or(usize::MAX)) {
        if json {
            push_json(&mut out, &cursor)?;
        } else {
            out.push_str(&format_entry(&cursor, colors));
            out.push('\n');
        }
    }
    Ok(out)
}
