//! Decoded table slots.
//!
//! Reading an entry at a pointer yields one of three shapes. The root
//! placeholder gets its own variant so the engines never mistake it for a
//! node: it has no value, no jump, and never appears in a path.

use crate::trie::Ptr;

/// What a pointer addresses inside a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Raw zero word closing the table.
    End,
    /// Structural marker without value or jump.
    Placeholder(Placeholder),
    /// A node carrying a value, a child table, or both.
    Entry(Entry),
}

impl Slot {
    /// Code unit of a placeholder or entry.
    pub fn code(&self) -> Option<u16> {
        match self {
            Slot::End => None,
            Slot::Placeholder(p) => Some(p.code),
            Slot::Entry(e) => Some(e.code),
        }
    }

    /// Pointer to the slot following this one in the same table.
    pub fn next(&self) -> Option<Ptr> {
        match self {
            Slot::End => None,
            Slot::Placeholder(p) => Some(p.next),
            Slot::Entry(e) => Some(e.next),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub ptr: Ptr,
    pub code: u16,
    pub next: Ptr,
}

/// A decoded node.
///
/// At least one of `value` and `jump` is set; entries with neither decode as
/// [`Slot::Placeholder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Pointer to the code word.
    pub ptr: Ptr,
    pub code: u16,
    pub value: Option<u32>,
    /// Start of the child table.
    pub jump: Option<Ptr>,
    /// Pointer to the next sibling slot.
    pub next: Ptr,
}

impl Entry {
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_branch(&self) -> bool {
        self.jump.is_some()
    }
}
