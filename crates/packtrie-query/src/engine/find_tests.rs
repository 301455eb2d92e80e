//! Tests for exact-path lookup.

use packtrie_format::fixtures;

use super::error::QueryError;
use super::query::Query;

#[test]
fn search_leaf() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    let ab = query.search("ab", None).unwrap().unwrap();
    assert_eq!(ab.ancestors(), [1, 6]);
    assert_eq!(ab.get_value(), Some(42));
    assert_eq!(ab.get_jump(), None);

    let cd = query.search("cd", None).unwrap().unwrap();
    assert_eq!(cd.ancestors(), [3, 9]);
    assert_eq!(cd.value(), Ok(43));
}

#[test]
fn search_branch() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    let a = query.search("a", None).unwrap().unwrap();
    assert!(a.is_branch());
    assert!(!a.is_leaf());
    assert_eq!(a.get_jump(), Some(6));
}

#[test]
fn find_by_codes() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    let found = query.find(&[99, 100], None).unwrap().unwrap();
    assert_eq!(found.ancestors(), [3, 9]);
}

#[test]
fn miss_is_none() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.search("ax", None), Ok(None));
    assert_eq!(query.search("z", None), Ok(None));
    // Key continues past a leaf.
    assert_eq!(query.search("abc", None), Ok(None));
}

#[test]
fn empty_key_is_none() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.search("", None), Ok(None));
    assert_eq!(query.find(&[], None), Ok(None));
}

#[test]
fn placeholder_is_never_matched() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(query.find(&[0xFFFF], None), Ok(None));
}

#[test]
fn resume_from_branch_is_relative() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    let b = query.search("b", Some(1)).unwrap().unwrap();
    assert_eq!(b.ancestors(), [6]);
    assert_eq!(b.get_value(), Some(42));
}

#[test]
fn resume_from_leaf_is_invalid_branch() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(
        query.search("x", Some(6)),
        Err(QueryError::InvalidBranch { ptr: 6 })
    );
}

#[test]
fn resume_from_placeholder_is_invalid_branch() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);

    assert_eq!(
        query.search("a", Some(0)),
        Err(QueryError::InvalidBranch { ptr: 0 })
    );
}

#[test]
fn nested_keys() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);

    let abc = query.search("abc", None).unwrap().unwrap();
    assert_eq!(abc.ancestors(), [1, 10, 14]);
    assert_eq!(abc.value(), Ok(3));

    let x = query.search("x", None).unwrap().unwrap();
    assert_eq!(x.get_value(), None);
    assert_eq!(x.get_jump(), Some(20));

    let ba = query.search("ba", None).unwrap().unwrap();
    assert!(ba.is_leaf());
    assert_eq!(ba.value(), Ok(0));
}

#[test]
fn astral_key_by_code_units() {
    let trie = fixtures::astral();
    let query = Query::new(&trie);

    let smile = query.search("\u{1F600}", None).unwrap().unwrap();
    assert_eq!(smile.ancestors(), [1, 4]);
    assert_eq!(smile.value(), Ok(7));
    assert_eq!(query.find(&[0xD83D, 0xDE00], None).unwrap(), Some(smile));
}

#[test]
fn lookup_is_idempotent() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);

    let first = query.search("ab", None).unwrap();
    let second = query.search("ab", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_trie_misses() {
    let trie = fixtures::empty();
    let query = Query::new(&trie);

    assert_eq!(query.search("a", None), Ok(None));
}
