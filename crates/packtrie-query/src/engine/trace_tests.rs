//! Tests for execution tracing.

use packtrie_format::{Colors, fixtures};

use super::query::Query;
use super::trace::{PrintTracer, Verbosity};

#[test]
fn trace_search_default() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Default, Colors::OFF);

    let found = query.search_with("ab", None, &mut tracer).unwrap();
    assert!(found.is_some());
    assert_eq!(
        tracer.lines(),
        ["  01  descend 'a' -> T06", "  06  yield \"ab\" = 42"]
    );
}

#[test]
fn trace_search_verbose() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Verbose, Colors::OFF);

    query.search_with("cd", None, &mut tracer).unwrap();

    insta::assert_snapshot!(tracer.render(), @r#"
    T00:
      00  skip <placeholder>
      01  scan 'a'
      03  scan 'c'
      03  descend 'c' -> T09
    T09:
      09  scan 'd'
      09  yield "cd" = 43
    "#);
}

#[test]
fn trace_miss() {
    let trie = fixtures::pair();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Default, Colors::OFF);

    let found = query.search_with("ax", None, &mut tracer).unwrap();
    assert!(found.is_none());
    assert_eq!(tracer.lines(), ["  01  descend 'a' -> T06", "  miss"]);
}

#[test]
fn trace_walk_backtracks() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Default, Colors::OFF);

    let next = query.next_with(&[1, 10, 14], &mut tracer).unwrap();
    assert_eq!(next.path(), "b");
    assert_eq!(
        tracer.lines(),
        [
            "  10  backtrack 'b'",
            "  01  backtrack 'a'",
            "  04  yield \"b\" = 4",
        ]
    );
}

#[test]
fn trace_walk_verbose() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Verbose, Colors::OFF);

    query.next_with(&[4, 17], &mut tracer).unwrap();

    insta::assert_snapshot!(tracer.render(), @r#"
      04  backtrack 'b'
      07  scan 'x'
      07  descend 'x' -> T20
    T20:
      20  scan 'y'
      20  descend 'y' -> T23
    T23:
      23  scan 'z'
      23  yield "xyz" = 6
    "#);
}

#[test]
fn trace_walk_resumes_in_child_table() {
    let trie = fixtures::nested();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Verbose, Colors::OFF);

    query.next_with(&[1], &mut tracer).unwrap();

    insta::assert_snapshot!(tracer.render(), @r#"
    T10:
      10  scan 'b'
      10  yield "ab" = 2
    "#);
}

#[test]
fn trace_walk_from_start_enters_root() {
    let trie = fixtures::single();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Verbose, Colors::OFF);

    query.next_with(&[], &mut tracer).unwrap();
    assert_eq!(
        tracer.lines(),
        ["T0:", "  0  skip <placeholder>", "  1  scan 'x'", "  1  yield \"x\" = 42"]
    );
}

#[test]
fn trace_surrogate_code() {
    let trie = fixtures::astral();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Default, Colors::OFF);

    query.find_with(&[0xD83D, 0xDE00], None, &mut tracer).unwrap();
    assert_eq!(
        tracer.lines(),
        ["  1  descend U+D83D -> T4", "  4  yield \"\u{1F600}\" = 7"]
    );
}

#[test]
fn trace_colored() {
    let trie = fixtures::single();
    let query = Query::new(&trie);
    let mut tracer = PrintTracer::new(&trie, Verbosity::Default, Colors::ON);

    query.search_with("x", None, &mut tracer).unwrap();
    assert_eq!(
        tracer.lines(),
        ["  1  \x1b[34myield\x1b[0m \"x\" = \x1b[33m42\x1b[0m"]
    );
}
