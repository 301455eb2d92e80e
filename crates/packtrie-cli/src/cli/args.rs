//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Packed trie file (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Packed trie file")
}

/// Header position in words (--offset).
pub fn offset_arg() -> Arg {
    Arg::new("offset")
        .long("offset")
        .value_name("WORDS")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Word offset of the trie header inside the file")
}

/// Byte order of the file (--endian).
pub fn endian_arg() -> Arg {
    Arg::new("endian")
        .long("endian")
        .value_name("ORDER")
        .default_value("native")
        .value_parser(["native", "little", "big"])
        .help("Byte order of the words in the file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Key to look up (positional).
pub fn term_arg() -> Arg {
    Arg::new("term")
        .value_name("TERM")
        .help("Key to look up")
}

/// Prefix whose children are listed (positional).
pub fn prefix_pos_arg() -> Arg {
    Arg::new("prefix")
        .value_name("PREFIX")
        .help("List the children of this prefix instead of the root table")
}

/// Restrict enumeration to a subtree (--prefix).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .value_name("PREFIX")
        .help("Only list keys starting with PREFIX")
}

/// Entries to skip before output (--skip).
pub fn skip_arg() -> Arg {
    Arg::new("skip")
        .long("skip")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Skip the first N entries")
}

/// Maximum number of results (--limit).
pub fn limit_arg(default: &'static str) -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_name("N")
        .default_value(default)
        .value_parser(value_parser!(usize))
        .help("Maximum number of results")
}

/// Unbounded variant of [`limit_arg`] for `list`.
pub fn optional_limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum number of entries (default: all)")
}

/// JSON Lines output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print one JSON object per result")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v also shows every scanned entry)")
}
