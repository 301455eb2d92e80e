//! Errors raised while loading a packed trie.

use std::io;

use crate::header::{HEADER_WORDS, MAGIC};

/// Load error.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Byte length is not a whole number of 32-bit words.
    #[error("invalid input: {len} bytes is not a multiple of 4")]
    InvalidInput { len: usize },
    /// The word at the requested offset is not the format magic.
    #[error("invalid header: expected magic {MAGIC:#010x}, found {found:#010x} at word {offset}")]
    InvalidHeader { offset: usize, found: u32 },
    /// The buffer ends before the header words at the requested offset.
    #[error("buffer too small: {len} words cannot hold a {HEADER_WORDS}-word header at word {offset}")]
    TooSmall { offset: usize, len: usize },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
