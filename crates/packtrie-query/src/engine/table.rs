//! Table listings: ordinal access and full code unit lists.

use packtrie_format::{Ptr, ROOT, Slot, code_to_char};

use super::query::Query;

impl<'t> Query<'t> {
    /// Code unit of the `ordinal`-th slot of the table at `table`.
    ///
    /// Counts every slot before the terminator, the root placeholder
    /// included, so `code_at(0, ROOT)` is the placeholder's code unit.
    pub fn code_at(&self, ordinal: usize, table: Ptr) -> Option<u16> {
        self.trie.table(table).nth(ordinal).and_then(|slot| slot.code())
    }

    /// Same as [`code_at`](Self::code_at), as a character.
    pub fn char_at(&self, ordinal: usize, table: Ptr) -> Option<char> {
        self.code_at(ordinal, table).map(code_to_char)
    }

    /// Code units of the entries of the table at `table`, in table order.
    ///
    /// A placeholder ends the listing, so the root table lists as empty.
    pub fn codes(&self, table: Ptr) -> Vec<u16> {
        self.trie
            .table(table)
            .map_while(|slot| match slot {
                Slot::Entry(entry) => Some(entry.code),
                _ => None,
            })
            .collect()
    }

    /// Same as [`codes`](Self::codes), as characters.
    pub fn chars(&self, table: Ptr) -> Vec<char> {
        self.codes(table).into_iter().map(code_to_char).collect()
    }

    /// Code units of the first level of keys.
    ///
    /// Starts past the root placeholder, which [`codes`](Self::codes) treats
    /// as the end of the listing.
    pub fn root_codes(&self) -> Vec<u16> {
        let start = match self.trie.slot(ROOT) {
            Slot::Placeholder(placeholder) => placeholder.next,
            _ => ROOT,
        };
        self.codes(start)
    }

    pub fn root_chars(&self) -> Vec<char> {
        self.root_codes().into_iter().map(code_to_char).collect()
    }
}
