//! Sibling table iteration.

use std::iter::FusedIterator;

use crate::slot::{Entry, Slot};
use crate::trie::{Ptr, Trie};

/// Iterator over the slots of one table.
///
/// Yields placeholders and entries in storage order and stops at the
/// terminator word or at the end of the storage, whichever comes first.
/// Value and jump words are skipped according to each code word's flags.
#[derive(Clone, Debug)]
pub struct Table<'t> {
    trie: &'t Trie,
    start: Ptr,
    pos: Option<Ptr>,
}

impl<'t> Table<'t> {
    pub fn new(trie: &'t Trie, start: Ptr) -> Self {
        Self {
            trie,
            start,
            pos: Some(start),
        }
    }

    /// Pointer to the first slot of the table.
    pub fn start(&self) -> Ptr {
        self.start
    }

    /// Only the value or jump bearing entries.
    pub fn entries(self) -> impl Iterator<Item = Entry> + 't {
        self.filter_map(|slot| match slot {
            Slot::Entry(entry) => Some(entry),
            _ => None,
        })
    }
}

impl Iterator for Table<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let pos = self.pos?;
        if !self.trie.contains(pos) {
            self.pos = None;
            return None;
        }

        let slot = self.trie.slot(pos);
        self.pos = slot.next();
        match slot {
            Slot::End => None,
            _ => Some(slot),
        }
    }
}

impl FusedIterator for Table<'_> {}
