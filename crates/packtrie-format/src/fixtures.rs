//! Hand-encoded sample tries.
//!
//! Pointer comments are relative to the trie base (first word after the
//! header).

use crate::header::MAGIC;
use crate::trie::Trie;

/// `{"x": 42}`
#[rustfmt::skip]
pub const SINGLE: &[u32] = &[
    MAGIC, 1,          // header
    0x0000_FFFF,       // 0: root placeholder
    0x8000_0078, 42,   // 1: "x" = 42
    0,                 // fin
];

/// `{"ab": 42, "cd": 43}`, preceded by four unrelated words.
#[rustfmt::skip]
pub const PAIR: &[u32] = &[
    91, 92, 93, 94,    // foreign data
    MAGIC, 2,          // header
    0x0000_FFFF,       // 0: root placeholder
    0x4000_0061, 6,    // 1: "a" -> 6
    0x4000_0063, 9,    // 3: "c" -> 9
    0,                 // fin
    0x8000_0062, 42,   // 6: "ab" = 42
    0,                 // fin
    0x8000_0064, 43,   // 9: "cd" = 43
    0,                 // fin
];

/// Word offset of the header inside [`PAIR`].
pub const PAIR_OFFSET: usize = 4;

/// `{"2": 42, "4": 43, "6": 44}`
#[rustfmt::skip]
pub const FLAT: &[u32] = &[
    MAGIC, 3,          // header
    0x0000_FFFF,       // 0: root placeholder
    0x8000_0032, 42,   // 1: "2" = 42
    0x8000_0034, 43,   // 3: "4" = 43
    0x8000_0036, 44,   // 5: "6" = 44
    0,                 // fin
];

/// `{"a": 1, "ab": 2, "abc": 3, "b": 4, "ba": 0, "xyz": 6}`
///
/// Mixes value+jump nodes, jump-only chains and a zero value.
#[rustfmt::skip]
pub const NESTED: &[u32] = &[
    MAGIC, 6,             // header
    0x0000_FFFF,          // 0: root placeholder
    0xC000_0061, 1, 10,   // 1: "a" = 1 -> 10
    0xC000_0062, 4, 17,   // 4: "b" = 4 -> 17
    0x4000_0078, 20,      // 7: "x" -> 20
    0,                    // 9: fin
    0xC000_0062, 2, 14,   // 10: "ab" = 2 -> 14
    0,                    // 13: fin
    0x8000_0063, 3,       // 14: "abc" = 3
    0,                    // 16: fin
    0x8000_0061, 0,       // 17: "ba" = 0
    0,                    // 19: fin
    0x4000_0079, 23,      // 20: "xy" -> 23
    0,                    // 22: fin
    0x8000_007A, 6,       // 23: "xyz" = 6
    0,                    // 25: fin
];

/// `{"\u{1F600}": 7}`, a key outside the BMP stored as a surrogate pair.
#[rustfmt::skip]
pub const ASTRAL: &[u32] = &[
    MAGIC, 1,             // header
    0x0000_FFFF,          // 0: root placeholder
    0x4000_D83D, 4,       // 1: high surrogate -> 4
    0,                    // 3: fin
    0x8000_DE00, 7,       // 4: low surrogate = 7
    0,                    // 6: fin
];

/// Header followed by a bare placeholder and terminator.
pub const EMPTY: &[u32] = &[MAGIC, 0, 0x0000_FFFF, 0];

pub fn single() -> Trie {
    Trie::from_words(SINGLE).expect("SINGLE fixture is valid")
}

pub fn pair() -> Trie {
    Trie::from_words_at(PAIR, PAIR_OFFSET).expect("PAIR fixture is valid")
}

pub fn flat() -> Trie {
    Trie::from_words(FLAT).expect("FLAT fixture is valid")
}

pub fn nested() -> Trie {
    Trie::from_words(NESTED).expect("NESTED fixture is valid")
}

pub fn astral() -> Trie {
    Trie::from_words(ASTRAL).expect("ASTRAL fixture is valid")
}

pub fn empty() -> Trie {
    Trie::from_words(EMPTY).expect("EMPTY fixture is valid")
}
