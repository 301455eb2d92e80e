//! Tests for trie loading and node accessors.

use super::error::FormatError;
use super::fixtures;
use super::header::MAGIC;
use super::slot::{Entry, Placeholder, Slot};
use super::storage::{ByteOrder, WordStorage};
use super::trie::{LoadOptions, Trie};

#[test]
fn load_reads_header() {
    let trie = fixtures::single();
    assert_eq!(trie.declared_count(), 1);
    assert_eq!(trie.base(), 2);
    assert_eq!(trie.len(), 4);
    assert_eq!(trie.header().magic, MAGIC);
}

#[test]
fn load_at_offset() {
    let trie = fixtures::pair();
    assert_eq!(trie.declared_count(), 2);
    assert_eq!(trie.base(), 6);
    assert_eq!(trie.len(), 12);
}

#[test]
fn load_rejects_bad_magic() {
    let err = Trie::from_words([1u32, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidHeader {
            offset: 0,
            found: 1
        }
    ));

    // PAIR has its header at word 4, not 0.
    let err = Trie::from_words(fixtures::PAIR).unwrap_err();
    assert!(matches!(err, FormatError::InvalidHeader { found: 91, .. }));
}

#[test]
fn load_rejects_truncated_header() {
    let err = Trie::from_words([MAGIC]).unwrap_err();
    assert!(matches!(err, FormatError::TooSmall { offset: 0, len: 1 }));

    let err = Trie::from_words_at(fixtures::SINGLE, 99).unwrap_err();
    assert!(matches!(err, FormatError::TooSmall { offset: 99, .. }));
}

#[test]
fn load_from_bytes() {
    let bytes: Vec<u8> = fixtures::SINGLE
        .iter()
        .flat_map(|w| w.to_be_bytes())
        .collect();

    let trie = Trie::from_bytes(&bytes, LoadOptions::new().order(ByteOrder::Big)).unwrap();
    assert_eq!(trie.code(1), 0x78);

    let err = Trie::from_bytes(&bytes[..5], LoadOptions::new()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidInput { len: 5 }));
}

#[test]
fn load_from_missing_file() {
    let err = Trie::from_path("/nonexistent/packtrie.bin", LoadOptions::new()).unwrap_err();
    assert!(matches!(err, FormatError::Io(_)));
}

#[test]
fn tries_share_one_storage() {
    let mut words = fixtures::SINGLE.to_vec();
    words.extend_from_slice(fixtures::FLAT);
    let storage = WordStorage::from_vec(words);

    let first = Trie::new(storage.clone(), 0).unwrap();
    let second = Trie::new(storage, fixtures::SINGLE.len()).unwrap();
    assert_eq!(first.declared_count(), 1);
    assert_eq!(second.declared_count(), 3);
    assert_eq!(second.code(1), 0x32);
}

#[test]
fn accessors_single() {
    let trie = fixtures::single();
    assert_eq!(trie.code(0), 0xFFFF);
    assert_eq!(trie.char(0), Some('\u{FFFF}'));
    assert_eq!(trie.code(1), 120);
    assert_eq!(trie.char(1), Some('x'));
    assert!(trie.has_value(1));
    assert!(!trie.has_jump(1));
}

#[test]
fn accessors_out_of_range_are_raw_reads() {
    let trie = fixtures::single();
    // value word of "x"
    assert_eq!(trie.code(2), 42);
    assert_eq!(trie.char(2), Some('*'));
    // header words
    assert_eq!(trie.code(-1), 1);
    assert_eq!(trie.char(-1), Some('\u{1}'));
    assert_eq!(trie.code(-2), 0x534E);
    assert_eq!(trie.char(-2), Some('\u{534E}'));
    // before and after the storage
    assert_eq!(trie.code(-3), 0);
    assert_eq!(trie.char(-3), Some('\0'));
    assert_eq!(trie.code(999), 0);
    assert_eq!(trie.char(999), Some('\0'));
    assert_eq!(trie.raw(i64::MAX), 0);
    assert_eq!(trie.raw(i64::MIN), 0);
}

#[test]
fn accessors_pair() {
    let trie = fixtures::pair();
    assert_eq!(trie.code(1), 97);
    assert_eq!(trie.code(6), 98);
    assert_eq!(trie.code(3), 99);
    assert_eq!(trie.code(9), 100);
    assert_eq!(trie.code(-1), 2);
    assert_eq!(trie.code(-3), 94);
    assert_eq!(trie.code(999), 0);
}

#[test]
fn slot_decodes_entries() {
    let trie = fixtures::pair();

    assert_eq!(
        trie.slot(0),
        Slot::Placeholder(Placeholder {
            ptr: 0,
            code: 0xFFFF,
            next: 1
        })
    );
    assert_eq!(
        trie.slot(1),
        Slot::Entry(Entry {
            ptr: 1,
            code: 97,
            value: None,
            jump: Some(6),
            next: 3
        })
    );
    assert_eq!(
        trie.slot(6),
        Slot::Entry(Entry {
            ptr: 6,
            code: 98,
            value: Some(42),
            jump: None,
            next: 8
        })
    );
    assert_eq!(trie.slot(5), Slot::End);
    assert_eq!(trie.slot(999), Slot::End);
}

#[test]
fn flagless_word_is_placeholder_in_any_table() {
    let trie = Trie::from_words(vec![MAGIC, 0, 0xFFFF, 0x0000_0061, 0x8000_0062, 5, 0]).unwrap();

    assert_eq!(
        trie.slot(1),
        Slot::Placeholder(Placeholder {
            ptr: 1,
            code: 0x61,
            next: 2
        })
    );
    assert_eq!(
        trie.slot(2),
        Slot::Entry(Entry {
            ptr: 2,
            code: 0x62,
            value: Some(5),
            jump: None,
            next: 4
        })
    );
    assert_eq!(trie.skip(1), 2);
}

#[test]
fn slot_keeps_zero_values() {
    let trie = fixtures::nested();
    let Slot::Entry(entry) = trie.slot(17) else {
        panic!("expected entry at 17");
    };
    assert_eq!(entry.value, Some(0));
    assert!(entry.is_leaf());
    assert!(!entry.is_branch());
}

#[test]
fn skip_moves_past_entry() {
    let trie = fixtures::nested();
    assert_eq!(trie.skip(0), 1);
    assert_eq!(trie.skip(1), 4);
    assert_eq!(trie.skip(7), 9);
    assert_eq!(trie.skip(14), 16);
}

#[test]
fn trie_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Trie>();
}
