//! Query results bound to their trie.

use std::ptr;

use packtrie_format::{Ptr, Trie, code_to_char};

use super::error::{Missing, QueryError};
use super::query::Query;
use super::walk::Descendants;

/// A node reached by lookup or enumeration.
///
/// Carries the full ancestor path from the root table down to the node, so
/// every follow-up operation (`next`, `search`, `chars`) can start from it
/// without re-walking the trie.
#[derive(Clone, Debug)]
pub struct Cursor<'t> {
    trie: &'t Trie,
    path: Vec<Ptr>,
    value: Option<u32>,
    jump: Option<Ptr>,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(trie: &'t Trie, path: Vec<Ptr>, value: Option<u32>, jump: Option<Ptr>) -> Self {
        Self {
            trie,
            path,
            value,
            jump,
        }
    }

    pub fn trie(&self) -> &'t Trie {
        self.trie
    }

    fn query(&self) -> Query<'t> {
        Query::new(self.trie)
    }

    /// The node carries a value.
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    /// The node has a child table.
    pub fn is_branch(&self) -> bool {
        self.jump.is_some()
    }

    pub fn value(&self) -> Result<u32, QueryError> {
        self.value.ok_or(QueryError::InvalidState(Missing::Value))
    }

    pub fn jump(&self) -> Result<Ptr, QueryError> {
        self.jump.ok_or(QueryError::InvalidState(Missing::Jump))
    }

    /// Pointer of the node itself, the last element of the path.
    pub fn pointer(&self) -> Result<Ptr, QueryError> {
        self.path
            .last()
            .copied()
            .ok_or(QueryError::InvalidState(Missing::Pointer))
    }

    pub fn get_value(&self) -> Option<u32> {
        self.value
    }

    pub fn get_jump(&self) -> Option<Ptr> {
        self.jump
    }

    /// Entry pointers from the root table down to this node.
    pub fn ancestors(&self) -> &[Ptr] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Code unit of the node itself.
    pub fn code(&self) -> Option<u16> {
        self.path.last().map(|&ptr| self.trie.code(i64::from(ptr)))
    }

    pub fn char(&self) -> Option<char> {
        self.code().map(code_to_char)
    }

    /// The key spelled by the path. Lone surrogates become U+FFFD.
    pub fn path(&self) -> String {
        decode_path(self.trie, &self.path)
    }

    /// The value-bearing node following this one in pre-order.
    pub fn next(&self) -> Option<Cursor<'t>> {
        self.query().next(&self.path)
    }

    /// Look up `term` below this node.
    pub fn search(&self, term: &str) -> Result<Option<Cursor<'t>>, QueryError> {
        let codes: Vec<u16> = term.encode_utf16().collect();
        self.find(&codes)
    }

    /// Look up `codes` below this node.
    ///
    /// The result's path continues this cursor's path.
    pub fn find(&self, codes: &[u16]) -> Result<Option<Cursor<'t>>, QueryError> {
        let pointer = self.pointer()?;
        let found = self.query().find(codes, Some(pointer))?;
        Ok(found.map(|sub| {
            let mut path = Vec::with_capacity(self.path.len() + sub.path.len());
            path.extend_from_slice(&self.path);
            path.extend_from_slice(&sub.path);
            Cursor::new(self.trie, path, sub.value, sub.jump)
        }))
    }

    /// Code units of the child table.
    pub fn codes(&self) -> Result<Vec<u16>, QueryError> {
        let jump = self.jump()?;
        Ok(self.query().codes(jump))
    }

    /// Characters of the child table.
    pub fn chars(&self) -> Result<Vec<char>, QueryError> {
        let jump = self.jump()?;
        Ok(self.query().chars(jump))
    }

    /// Value-bearing nodes strictly below this one, in pre-order.
    pub fn descendants(&self) -> Descendants<'t> {
        Descendants::new(self.query(), self.path.clone())
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.trie, other.trie)
            && self.path == other.path
            && self.value == other.value
            && self.jump == other.jump
    }
}

impl Eq for Cursor<'_> {}

/// Decode the key spelled by a path of entry pointers.
pub fn decode_path(trie: &Trie, path: &[Ptr]) -> String {
    let units: Vec<u16> = path.iter().map(|&ptr| trie.code(i64::from(ptr))).collect();
    String::from_utf16_lossy(&units)
}
