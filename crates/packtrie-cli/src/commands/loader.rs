//! Load a trie from the command line flags.

use std::path::PathBuf;

use packtrie_format::{ByteOrder, LoadOptions, Trie};
use packtrie_query::{Cursor, Query};

use super::error::CliError;

/// Where and how to read the trie.
pub struct TrieSource {
    pub path: PathBuf,
    /// Header position in words.
    pub offset: usize,
    pub order: ByteOrder,
}

pub fn load_trie(source: &TrieSource) -> Result<Trie, CliError> {
    let options = LoadOptions::new().offset(source.offset).order(source.order);
    Ok(Trie::from_path(&source.path, options)?)
}

/// Look up `term`, treating a miss as an error.
pub fn require_key<'t>(query: &Query<'t>, term: &str) -> Result<Cursor<'t>, CliError> {
    query
        .search(term, None)?
        .ok_or_else(|| CliError::NotFound(term.to_string()))
}
