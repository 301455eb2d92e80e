//! Trie over shared word storage.
//!
//! The [`Trie`] validates the header once and then answers raw reads relative
//! to its base offset. Low-level accessors take signed pointers and perform no
//! range validation: a read outside the backing array yields the word `0`.

use std::path::Path;

use crate::error::FormatError;
use crate::header::{HEADER_WORDS, Header};
use crate::slot::{Entry, Placeholder, Slot};
use crate::storage::{ByteOrder, WordStorage};
use crate::table::Table;
use crate::word::Word;

/// Word offset of an entry's code word, relative to the trie base.
pub type Ptr = u32;

/// Pointer to the root table.
pub const ROOT: Ptr = 0;

/// Options for loading a trie from raw bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    offset: usize,
    order: ByteOrder,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word offset of the header inside the buffer.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }
}

/// A validated packed trie.
#[derive(Clone, Debug)]
pub struct Trie {
    storage: WordStorage,
    header: Header,
    /// Absolute index of pointer 0 (first word after the header).
    base: usize,
}

impl Trie {
    /// Wrap storage whose header starts at word `offset`.
    pub fn new(storage: WordStorage, offset: usize) -> Result<Self, FormatError> {
        let header = storage
            .get(offset..)
            .and_then(Header::from_words)
            .ok_or(FormatError::TooSmall {
                offset,
                len: storage.len(),
            })?;

        if !header.validate_magic() {
            return Err(FormatError::InvalidHeader {
                offset,
                found: header.magic,
            });
        }

        Ok(Self {
            storage,
            header,
            base: offset + HEADER_WORDS,
        })
    }

    /// Load from words with the header at word 0.
    pub fn from_words(words: impl Into<Vec<u32>>) -> Result<Self, FormatError> {
        Self::from_words_at(words, 0)
    }

    /// Load from words with the header at word `offset`.
    pub fn from_words_at(words: impl Into<Vec<u32>>, offset: usize) -> Result<Self, FormatError> {
        Self::new(WordStorage::from_vec(words.into()), offset)
    }

    /// Load from raw bytes.
    pub fn from_bytes(bytes: &[u8], options: LoadOptions) -> Result<Self, FormatError> {
        let storage = WordStorage::from_bytes(bytes, options.order)?;
        Self::new(storage, options.offset)
    }

    /// Load from a file path.
    pub fn from_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, FormatError> {
        let storage = WordStorage::from_file(path, options.order)?;
        Self::new(storage, options.offset)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Entry count declared in the header. Informational only.
    pub fn declared_count(&self) -> u32 {
        self.header.count
    }

    /// Absolute word index of pointer 0.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Number of words from the base to the end of the storage.
    pub fn len(&self) -> usize {
        self.storage.len().saturating_sub(self.base)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `ptr` addresses a word inside the storage.
    #[inline]
    pub fn contains(&self, ptr: Ptr) -> bool {
        (ptr as usize) < self.len()
    }

    // Node accessors. No range validation: reads past either end of the
    // storage return 0, so out-of-range results are deterministic.

    /// Raw word at `base + ptr`.
    #[inline]
    pub fn raw(&self, ptr: i64) -> u32 {
        (self.base as i64)
            .checked_add(ptr)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| self.storage.get(idx))
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn word(&self, ptr: i64) -> Word {
        Word::from_raw(self.raw(ptr))
    }

    pub fn has_value(&self, ptr: i64) -> bool {
        self.word(ptr).has_value()
    }

    pub fn has_jump(&self, ptr: i64) -> bool {
        self.word(ptr).has_jump()
    }

    pub fn code(&self, ptr: i64) -> u16 {
        self.word(ptr).code()
    }

    /// Character of the code unit at `ptr`, `None` for lone surrogates.
    pub fn char(&self, ptr: i64) -> Option<char> {
        self.word(ptr).char()
    }

    /// Decode the slot whose code word is at `ptr`.
    pub fn slot(&self, ptr: Ptr) -> Slot {
        let word = self.word(i64::from(ptr));
        if word.is_terminator() {
            return Slot::End;
        }

        let next = ptr.saturating_add(word.width());
        if word.is_placeholder() {
            return Slot::Placeholder(Placeholder {
                ptr,
                code: word.code(),
                next,
            });
        }

        let mut operand = i64::from(ptr) + 1;
        let value = word.has_value().then(|| {
            let value = self.raw(operand);
            operand += 1;
            value
        });
        let jump = word.has_jump().then(|| self.raw(operand));

        Slot::Entry(Entry {
            ptr,
            code: word.code(),
            value,
            jump,
            next,
        })
    }

    /// Pointer to the slot following the entry at `ptr` in the same table.
    #[inline]
    pub fn skip(&self, ptr: Ptr) -> Ptr {
        ptr.saturating_add(self.word(i64::from(ptr)).width())
    }

    /// Iterate the slots of the table starting at `start`.
    pub fn table(&self, start: Ptr) -> Table<'_> {
        Table::new(self, start)
    }

    /// Iterate the root table.
    pub fn root(&self) -> Table<'_> {
        Table::new(self, ROOT)
    }
}
