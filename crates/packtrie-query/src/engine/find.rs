//! Exact-path lookup.
//!
//! Walks one table per code unit: scan the current table for the target,
//! then follow its jump into the next table. A lookup touches each table on
//! the path once and never backtracks.

use packtrie_format::{Entry, Ptr, ROOT, Slot};

use super::cursor::Cursor;
use super::error::QueryError;
use super::query::Query;
use super::trace::{NoopTracer, Tracer};

impl<'t> Query<'t> {
    /// Look up a sequence of UTF-16 code units.
    ///
    /// With `resume`, the lookup starts in the child table of the entry at
    /// that pointer and the returned path is relative to it. Returns
    /// `Ok(None)` on a miss and for an empty sequence.
    pub fn find(&self, codes: &[u16], resume: Option<Ptr>) -> Result<Option<Cursor<'t>>, QueryError> {
        self.find_with(codes, resume, &mut NoopTracer)
    }

    /// Look up a string, compared by UTF-16 code units.
    pub fn search(&self, term: &str, resume: Option<Ptr>) -> Result<Option<Cursor<'t>>, QueryError> {
        self.search_with(term, resume, &mut NoopTracer)
    }

    pub fn search_with<T: Tracer>(
        &self,
        term: &str,
        resume: Option<Ptr>,
        tracer: &mut T,
    ) -> Result<Option<Cursor<'t>>, QueryError> {
        let codes: Vec<u16> = term.encode_utf16().collect();
        self.find_with(&codes, resume, tracer)
    }

    pub fn find_with<T: Tracer>(
        &self,
        codes: &[u16],
        resume: Option<Ptr>,
        tracer: &mut T,
    ) -> Result<Option<Cursor<'t>>, QueryError> {
        let Some(&first) = codes.first() else {
            return Ok(None);
        };

        let mut pos = match resume {
            None => ROOT,
            Some(ptr) => match self.trie.slot(ptr) {
                Slot::Entry(Entry {
                    jump: Some(jump), ..
                }) => jump,
                _ => return Err(QueryError::InvalidBranch { ptr }),
            },
        };
        let mut path: Vec<Ptr> = Vec::with_capacity(codes.len());
        let mut target = first;
        tracer.trace_enter_table(pos);

        loop {
            if !self.trie.contains(pos) {
                tracer.trace_miss();
                return Ok(None);
            }

            let entry = match self.trie.slot(pos) {
                Slot::End => {
                    tracer.trace_miss();
                    return Ok(None);
                }
                Slot::Placeholder(placeholder) => {
                    tracer.trace_placeholder(placeholder.ptr);
                    pos = placeholder.next;
                    continue;
                }
                Slot::Entry(entry) => entry,
            };

            tracer.trace_entry(&entry);
            if entry.code != target {
                pos = entry.next;
                continue;
            }

            path.push(entry.ptr);
            if path.len() == codes.len() {
                tracer.trace_yield(&path, entry.value);
                return Ok(Some(Cursor::new(self.trie, path, entry.value, entry.jump)));
            }

            // Matched a prefix, but the key ends here.
            let Some(jump) = entry.jump else {
                tracer.trace_miss();
                return Ok(None);
            };

            tracer.trace_descend(&entry);
            tracer.trace_enter_table(jump);
            target = codes[path.len()];
            pos = jump;
        }
    }
}
