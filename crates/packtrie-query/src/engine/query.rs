use packtrie_format::Trie;

/// Read-only query handle.
///
/// Cheap to copy. Operations are split by concern: table listings
/// (`table.rs`), exact lookup (`find.rs`) and enumeration (`walk.rs`).
#[derive(Clone, Copy, Debug)]
pub struct Query<'t> {
    pub(crate) trie: &'t Trie,
}

impl<'t> Query<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self { trie }
    }

    pub fn trie(&self) -> &'t Trie {
        self.trie
    }
}
