//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every command reads one trie, so all of them take the same loading flags.

use clap::Command;

use super::args::*;

/// New command taking the trie loading args shared by every command.
///
/// FILE is registered first so it stays the first positional.
fn trie_command(name: &'static str) -> Command {
    Command::new(name)
        .arg(file_arg())
        .arg(offset_arg())
        .arg(endian_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("packtrie")
        .about("Inspect and query packed word tries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(info_command())
        .subcommand(search_command())
        .subcommand(list_command())
        .subcommand(chars_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Show header information.
pub fn info_command() -> Command {
    trie_command("info")
        .about("Show header information and root characters")
        .after_help(
            r#"EXAMPLES:
  packtrie info words.nsr
  packtrie info bundle.bin --offset 1024"#,
        )
}

/// Look up one key.
pub fn search_command() -> Command {
    trie_command("search")
        .about("Look up a key and show its value, children and next entries")
        .after_help(
            r#"EXAMPLES:
  packtrie search words.nsr hello              # value and suggestions
  packtrie search words.nsr hel --limit 3      # three suggestions
  packtrie search words.nsr hello --json       # JSON Lines"#,
        )
        .arg(term_arg().required(true))
        .arg(limit_arg("10"))
        .arg(json_arg())
}

/// Enumerate entries.
pub fn list_command() -> Command {
    trie_command("list")
        .about("List value-bearing keys in enumeration order")
        .after_help(
            r#"EXAMPLES:
  packtrie list words.nsr                      # every key
  packtrie list words.nsr --prefix he          # keys under "he"
  packtrie list words.nsr --skip 100 --limit 10"#,
        )
        .arg(prefix_arg())
        .arg(skip_arg())
        .arg(optional_limit_arg())
        .arg(json_arg())
}

/// List table characters.
pub fn chars_command() -> Command {
    trie_command("chars")
        .about("List the characters of the root table or of a prefix's children")
        .arg(prefix_pos_arg())
}

/// Dump every reachable table.
pub fn dump_command() -> Command {
    trie_command("dump").about("Show the header and every reachable table")
}

/// Trace a lookup or the start of an enumeration.
pub fn trace_command() -> Command {
    trie_command("trace")
        .about("Trace a lookup, or the first entries of an enumeration")
        .after_help(
            r#"EXAMPLES:
  packtrie trace words.nsr hello               # trace a lookup
  packtrie trace words.nsr hello -v            # include every scanned entry
  packtrie trace words.nsr --limit 5           # first five enumeration steps"#,
        )
        .arg(term_arg())
        .arg(limit_arg("1"))
        .arg(verbose_arg())
}
