//! Header summary.

use packtrie_format::{Colors, Trie};
use packtrie_query::Query;

use super::loader::{TrieSource, load_trie};
use super::or_exit;
use super::output::format_chars;

pub struct InfoArgs {
    pub source: TrieSource,
    pub color: bool,
}

pub fn run(args: InfoArgs) {
    let trie = or_exit(load_trie(&args.source));
    print!("{}", render(&trie, Colors::new(args.color)));
}

pub fn render(trie: &Trie, colors: Colors) -> String {
    let c = colors;
    let header = trie.header();
    let root = Query::new(trie).root_chars();

    let mut out = String::new();
    out.push_str(&format!("{}magic{}  {:#010x}\n", c.dim, c.reset, header.magic));
    out.push_str(&format!("{}count{}  {}\n", c.dim, c.reset, header.count));
    out.push_str(&format!("{}base{}   {}\n", c.dim, c.reset, trie.base()));
    out.push_str(&format!("{}words{}  {}\n", c.dim, c.reset, trie.len()));
    out.push_str(&format!("{}root{}   {}\n", c.dim, c.reset, format_chars(&root)));
    out
}
