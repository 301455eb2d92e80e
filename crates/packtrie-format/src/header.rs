//! Trie header (2 words).
//!
//! Layout:
//! - word 0: magic, `0x3152534E`
//! - word 1: declared entry count (informational, never bounds traversal)
//!
//! The root table starts right after the header.

/// Format identifier stored in the first header word.
pub const MAGIC: u32 = 0x3152_534E;

/// Number of words occupied by the header.
pub const HEADER_WORDS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Format identifier, must equal [`MAGIC`].
    pub magic: u32,
    /// Entry count declared by the producer.
    pub count: u32,
}

impl Header {
    /// Decode the header starting at `words[0]`.
    ///
    /// Returns `None` when fewer than [`HEADER_WORDS`] words are available.
    pub fn from_words(words: &[u32]) -> Option<Self> {
        match words {
            [magic, count, ..] => Some(Self {
                magic: *magic,
                count: *count,
            }),
            _ => None,
        }
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }
}
