//! Pre-order traversal over value-bearing nodes.
//!
//! The walk state is the explicit stack of ancestor pointers. Each call to
//! [`Query::next`] reconstructs its position from that stack alone, so a walk
//! can be resumed from any cursor without holding an iterator.

use std::iter::FusedIterator;

use packtrie_format::{Entry, Ptr, ROOT, Slot};

use super::cursor::Cursor;
use super::query::Query;
use super::trace::{NoopTracer, Tracer};

impl<'t> Query<'t> {
    /// Next value-bearing node after `path` in pre-order.
    ///
    /// An empty `path` starts from the beginning of the root table.
    pub fn next(&self, path: &[Ptr]) -> Option<Cursor<'t>> {
        self.next_with(path, &mut NoopTracer)
    }

    pub fn next_with<T: Tracer>(&self, path: &[Ptr], tracer: &mut T) -> Option<Cursor<'t>> {
        let trie = self.trie;
        let mut path = path.to_vec();

        let mut pos = match path.pop() {
            None => {
                tracer.trace_enter_table(ROOT);
                ROOT
            }
            Some(last) => match trie.slot(last) {
                Slot::Entry(Entry {
                    jump: Some(jump), ..
                }) => {
                    path.push(last);
                    tracer.trace_enter_table(jump);
                    jump
                }
                // Mid-table: the walk continues with the next sibling.
                _ => trie.skip(last),
            },
        };

        loop {
            // A well-formed trie never nests deeper than it has words.
            if !trie.contains(pos) || path.len() > trie.len() {
                tracer.trace_miss();
                return None;
            }

            match trie.slot(pos) {
                Slot::End => {
                    let Some(parent) = path.pop() else {
                        tracer.trace_miss();
                        return None;
                    };
                    tracer.trace_backtrack(parent);
                    pos = trie.skip(parent);
                }
                Slot::Placeholder(placeholder) => {
                    tracer.trace_placeholder(placeholder.ptr);
                    pos = placeholder.next;
                }
                Slot::Entry(entry) => {
                    tracer.trace_entry(&entry);
                    path.push(entry.ptr);
                    match (entry.value, entry.jump) {
                        (None, Some(jump)) => {
                            tracer.trace_descend(&entry);
                            tracer.trace_enter_table(jump);
                            pos = jump;
                        }
                        (value, jump) => {
                            tracer.trace_yield(&path, value);
                            return Some(Cursor::new(trie, path, value, jump));
                        }
                    }
                }
            }
        }
    }

    /// The `skip`-th value-bearing node in enumeration order.
    pub fn get(&self, skip: usize) -> Option<Cursor<'t>> {
        self.entries().nth(skip)
    }

    /// Every value-bearing node, in pre-order.
    pub fn entries(&self) -> Entries<'t> {
        Entries {
            query: *self,
            path: Some(Vec::new()),
        }
    }
}

/// Iterator over value-bearing nodes, driven by [`Query::next`].
#[derive(Clone, Debug)]
pub struct Entries<'t> {
    query: Query<'t>,
    /// `None` once the walk is exhausted.
    path: Option<Vec<Ptr>>,
}

impl<'t> Entries<'t> {
    pub(crate) fn resume(query: Query<'t>, path: Vec<Ptr>) -> Self {
        Self {
            query,
            path: Some(path),
        }
    }
}

impl<'t> Iterator for Entries<'t> {
    type Item = Cursor<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.path.as_deref()?;
        match self.query.next(path) {
            Some(cursor) => {
                self.path = Some(cursor.ancestors().to_vec());
                Some(cursor)
            }
            None => {
                self.path = None;
                None
            }
        }
    }
}

impl FusedIterator for Entries<'_> {}

/// Value-bearing nodes strictly below a cursor.
#[derive(Clone, Debug)]
pub struct Descendants<'t> {
    inner: Entries<'t>,
    prefix: Vec<Ptr>,
}

impl<'t> Descendants<'t> {
    pub(crate) fn new(query: Query<'t>, prefix: Vec<Ptr>) -> Self {
        // A cursor without a child table has nothing below it. Resuming from
        // it would walk on into its siblings, so start exhausted instead.
        let has_children = prefix
            .last()
            .is_some_and(|&ptr| matches!(query.trie().slot(ptr), Slot::Entry(e) if e.jump.is_some()));
        let mut inner = Entries::resume(query, prefix.clone());
        if !has_children {
            inner.path = None;
        }
        Self { inner, prefix }
    }
}

impl<'t> Iterator for Descendants<'t> {
    type Item = Cursor<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.inner.next()?;
        let path = cursor.ancestors();
        if path.len() > self.prefix.len() && path.starts_with(&self.prefix) {
            return Some(cursor);
        }
        self.inner.path = None;
        None
    }
}

impl FusedIterator for Descendants<'_> {}
