//! Human-readable trie dump for debugging.
//!
//! Output has two sections:
//! - `[header]`: magic, declared count, base offset, word count
//! - `[tables]`: every table reachable from the root, in pointer order,
//!   one line per slot (`ptr  char [= value] [-> Tjump]`)

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::colors::Colors;
use crate::slot::Slot;
use crate::trie::{Ptr, ROOT, Trie};

/// Generate a human-readable dump of the trie.
pub fn dump(trie: &Trie, colors: Colors) -> String {
    let mut out = String::new();
    let ctx = DumpContext::new(trie, colors);

    dump_header(&mut out, trie, &ctx);
    dump_tables(&mut out, trie, &ctx);

    out
}

/// Number of decimal digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    let mut n = count.saturating_sub(1);
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

struct DumpContext {
    /// Start pointers of every reachable table.
    tables: BTreeSet<Ptr>,
    /// Width for pointers.
    ptr_width: usize,
    colors: Colors,
}

impl DumpContext {
    fn new(trie: &Trie, colors: Colors) -> Self {
        Self {
            tables: collect_tables(trie),
            ptr_width: width_for_count(trie.len()),
            colors,
        }
    }
}

/// Walk jump words from the root. Each table is visited once, so cyclic
/// jumps in a malformed buffer cannot loop.
fn collect_tables(trie: &Trie) -> BTreeSet<Ptr> {
    let mut seen = BTreeSet::new();
    let mut pending = vec![ROOT];

    while let Some(start) = pending.pop() {
        if !trie.contains(start) || !seen.insert(start) {
            continue;
        }
        for entry in trie.table(start).entries() {
            if let Some(jump) = entry.jump {
                pending.push(jump);
            }
        }
    }

    seen
}

fn dump_header(out: &mut String, trie: &Trie, ctx: &DumpContext) {
    let c = &ctx.colors;
    let header = trie.header();

    writeln!(out, "{}[header]{}", c.blue, c.reset).unwrap();
    writeln!(out, "magic = {:#010x}", header.magic).unwrap();
    writeln!(out, "count = {}", header.count).unwrap();
    writeln!(out, "base = {}", trie.base()).unwrap();
    writeln!(out, "words = {}", trie.len()).unwrap();
    out.push('\n');
}

fn dump_tables(out: &mut String, trie: &Trie, ctx: &DumpContext) {
    let c = &ctx.colors;
    let w = ctx.ptr_width;

    writeln!(out, "{}[tables]{}", c.blue, c.reset).unwrap();
    for &start in &ctx.tables {
        writeln!(out, "{}T{start:0w$}{}:", c.blue, c.reset).unwrap();
        for slot in trie.table(start) {
            dump_slot(out, &slot, ctx);
        }
    }
}

fn dump_slot(out: &mut String, slot: &Slot, ctx: &DumpContext) {
    let c = &ctx.colors;
    let w = ctx.ptr_width;

    match slot {
        Slot::End => {}
        Slot::Placeholder(p) => {
            writeln!(
                out,
                "  {:0w$}  {}<placeholder> U+{:04X}{}",
                p.ptr, c.dim, p.code, c.reset
            )
            .unwrap();
        }
        Slot::Entry(e) => {
            let mut line = format!(
                "  {:0w$}  {}{}{}",
                e.ptr,
                c.green,
                format_code(e.code),
                c.reset
            );
            if let Some(value) = e.value {
                write!(line, " = {}{value}{}", c.yellow, c.reset).unwrap();
            }
            if let Some(jump) = e.jump {
                write!(line, " -> {}T{jump:0w$}{}", c.blue, c.reset).unwrap();
            }
            writeln!(out, "{line}").unwrap();
        }
    }
}

/// Quoted character, or `U+XXXX` for lone surrogates.
fn format_code(code: u16) -> String {
    match char::from_u32(code as u32) {
        Some(ch) => format!("{ch:?}"),
        None => format!("U+{code:04X}"),
    }
}
