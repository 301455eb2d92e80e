//! Tests for table listings.

use packtrie_format::ROOT;
use packtrie_format::fixtures;

use super::query::Query;

#[test]
fn code_at_counts_placeholder() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.code_at(0, ROOT), Some(0xFFFF));
    assert_eq!(query.code_at(1, ROOT), Some(97));
    assert_eq!(query.code_at(2, ROOT), Some(99));
    assert_eq!(query.code_at(3, ROOT), None);
    assert_eq!(query.code_at(0, 6), Some(98));
    assert_eq!(query.code_at(1, 6), None);
}

#[test]
fn char_at() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.char_at(1, ROOT), Some('a'));
    assert_eq!(query.char_at(0, 9), Some('d'));
    assert_eq!(query.char_at(5, 9), None);
}

#[test]
fn codes_of_child_tables() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.codes(6), [98]);
    assert_eq!(query.chars(9), ['d']);
}

#[test]
fn codes_stop_at_placeholder() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert!(query.codes(ROOT).is_empty());
    assert_eq!(query.root_codes(), [97, 99]);
    assert_eq!(query.root_chars(), ['a', 'c']);
}

#[test]
fn root_chars_nested() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);

    assert_eq!(query.root_chars(), ['a', 'b', 'x']);
    assert_eq!(query.chars(10), ['b']);
    assert_eq!(query.chars(14), ['c']);
}

#[test]
fn listings_out_of_range() {
    let trie = fixtures::single();
    let query = Query::new(&trie);

    assert!(query.codes(999).is_empty());
    assert_eq!(query.code_at(0, 999), None);
}

#[test]
fn empty_trie_lists_nothing() {
    let trie = fixtures::empty();
    let query = Query::new(&trie);

    assert!(query.root_codes().is_empty());
    assert_eq!(query.code_at(0, ROOT), Some(0xFFFF));
}

#[test]
fn surrogate_listing_is_replaced() {
    let trie = fixtures::astral();
    let query = Query::new(&trie);

    assert_eq!(query.root_codes(), [0xD83D]);
    assert_eq!(query.root_chars(), ['\u{FFFD}']);
}
