//! Trace a lookup or an enumeration for debugging.

use packtrie_format::{Colors, Ptr};
use packtrie_query::{PrintTracer, Query, Verbosity};

use super::error::CliError;
use super::loader::{TrieSource, load_trie};
use super::or_exit;

pub struct TraceArgs {
    pub source: TrieSource,
    pub term: Option<String>,
    /// Enumeration steps to trace when no term is given.
    pub limit: usize,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let trie = or_exit(load_trie(&args.source));
    let query = Query::new(&trie);
    let colors = Colors::new(args.color);
    let out = or_exit(render(
        &query,
        args.term.as_deref(),
        args.limit,
        args.verbosity,
        colors,
    ));
    print!("{}", out);
}

pub fn render(
    query: &Query<'_>,
    term: Option<&str>,
    limit: usize,
    verbosity: Verbosity,
    colors: Colors,
) -> Result<String, CliError> {
    let mut tracer = PrintTracer::new(query.trie(), verbosity, colors);

    match term {
        Some(term) => {
            query.search_with(term, None, &mut tracer)?;
        }
        None => {
            let mut path: Vec<Ptr> = Vec::new();
            for _ in 0..limit {
                match query.next_with(&path, &mut tracer) {
                    Some(cursor) => path = cursor.ancestors().to_vec(),
                    None => break,
                }
            }
        }
    }

    Ok(tracer.render())
}
