//! Shared word storage.
//!
//! A packed trie is a flat array of 32-bit words. Several tries may live in
//! one file at different word offsets, so the storage is reference counted
//! and every [`Trie`](crate::Trie) over it shares the same allocation.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::error::FormatError;

const WORD_SIZE: usize = 4;

/// Byte order used to reinterpret raw bytes as words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Host order, the same reinterpretation a typed word view performs.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    fn decode(self, bytes: [u8; WORD_SIZE]) -> u32 {
        match self {
            ByteOrder::Native => u32::from_ne_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Parse a CLI-style name (`native`, `little`/`le`, `big`/`be`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "native" => Some(ByteOrder::Native),
            "little" | "le" => Some(ByteOrder::Little),
            "big" | "be" => Some(ByteOrder::Big),
            _ => None,
        }
    }
}

/// Immutable, cheaply cloneable word array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordStorage(Arc<[u32]>);

impl Deref for WordStorage {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u32>> for WordStorage {
    fn from(words: Vec<u32>) -> Self {
        Self::from_vec(words)
    }
}

impl WordStorage {
    /// Take ownership of already decoded words.
    pub fn from_vec(words: Vec<u32>) -> Self {
        Self(words.into())
    }

    /// Reinterpret bytes as words.
    ///
    /// Fails with [`FormatError::InvalidInput`] unless the length is a whole
    /// number of words.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, FormatError> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(FormatError::InvalidInput { len: bytes.len() });
        }

        let words: Vec<u32> = bytes
            .chunks_exact(WORD_SIZE)
            .map(|chunk| order.decode([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self::from_vec(words))
    }

    /// Read a file and reinterpret its bytes as words.
    pub fn from_file(path: impl AsRef<Path>, order: ByteOrder) -> Result<Self, FormatError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, order)
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}
