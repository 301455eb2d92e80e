//! List the characters of one table.

use packtrie_query::Query;

use super::error::CliError;
use super::loader::{TrieSource, load_trie, require_key};
use super::or_exit;

pub struct CharsArgs {
    pub source: TrieSource,
    pub prefix: Option<String>,
}

pub fn run(args: CharsArgs) {
    let trie = or_exit(load_trie(&args.source));
    let query = Query::new(&trie);
    print!("{}", or_exit(render(&query, args.prefix.as_deref())));
}

/// One character per line: the root table, or the children of a non-empty
/// `prefix`.
pub fn render(query: &Query<'_>, prefix: Option<&str>) -> Result<String, CliError> {
    let chars = match prefix.filter(|p| !p.is_empty()) {
        None => query.root_chars(),
        Some(prefix) => require_key(query, prefix)?.chars()?,
    };

    let mut out = String::new();
    for ch in chars {
        out.push(ch);
        out.push('\n');
    }
    Ok(out)
}
