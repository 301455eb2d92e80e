//! Look up a key and show what can follow it.
//!
//! Text output has three parts: the match itself, the characters of its
//! child table, and the next entries in enumeration order. The last two are
//! shown only for matches that have a child table.

use std::iter;

use packtrie_format::Colors;
use packtrie_query::{Cursor, Query};

use super::error::CliError;
use super::loader::{TrieSource, load_trie, require_key};
use super::or_exit;
use super::output::{format_chars, format_entry, push_json};

pub struct SearchArgs {
    pub source: TrieSource,
    pub term: String,
    pub limit: usize,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: SearchArgs) {
    let trie = or_exit(load_trie(&args.source));
    let query = Query::new(&trie);
    let cursor = or_exit(require_key(&query, &args.term));
    let out = or_exit(render(&cursor, args.limit, args.json, Colors::new(args.color)));
    print!("{}", out);
}

pub fn render(
    cursor: &Cursor<'_>,
    limit: usize,
    json: bool,
    colors: Colors,
) -> Result<String, CliError> {
    let c = colors;
    let following: Vec<Cursor<'_>> = if cursor.is_branch() {
        iter::successors(cursor.next(), |prev| prev.next())
            .take(limit)
            .collect()
    } else {
        Vec::new()
    };

    let mut out = String::new();
    if json {
        push_json(&mut out, cursor)?;
        for next in &following {
            push_json(&mut out, next)?;
        }
        return Ok(out);
    }

    out.push_str(&format_entry(cursor, colors));
    out.push('\n');
    if cursor.is_branch() {
        let chars = cursor.chars()?;
        out.push_str(&format!("{}chars{}  {}\n", c.dim, c.reset, format_chars(&chars)));
    }
    if !following.is_empty() {
        out.push_str(&format!("{}next{}\n", c.dim, c.reset));
        for next in &following {
            out.push_str("  ");
            out.push_str(&format_entry(next, colors));
            out.push('\n');
        }
    }
    Ok(out)
}
