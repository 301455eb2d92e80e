use packtrie_format::{Colors, dump};

use super::loader::{TrieSource, load_trie};
use super::or_exit;

pub struct DumpArgs {
    pub source: TrieSource,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let trie = or_exit(load_trie(&args.source));
    print!("{}", dump(&trie, Colors::new(args.color)));
}
