#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Packed word-trie format.
//!
//! This crate contains:
//! - Word storage and byte reinterpretation (`WordStorage`, `ByteOrder`)
//! - Header validation (`Header`, `MAGIC`)
//! - Code word and entry decoding (`Word`, `Slot`, `Entry`)
//! - Sibling table iteration (`Table`)
//! - Human-readable dump of a packed trie

pub mod colors;
pub mod dump;
pub mod error;
pub mod header;
pub mod slot;
pub mod storage;
pub mod table;
pub mod trie;
pub mod word;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

#[cfg(test)]
mod trie_tests;

// Re-export commonly used items at crate root
pub use colors::Colors;
pub use dump::{dump, width_for_count};
pub use error::FormatError;
pub use header::{HEADER_WORDS, Header, MAGIC};
pub use slot::{Entry, Placeholder, Slot};
pub use storage::{ByteOrder, WordStorage};
pub use table::Table;
pub use trie::{LoadOptions, Ptr, ROOT, Trie};
pub use word::{CODE_MASK, JUMP_BIT, VALUE_BIT, Word, code_to_char};
