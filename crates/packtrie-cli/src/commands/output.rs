//! Shared result formatting: text lines and JSON Lines records.

use packtrie_format::{Colors, Ptr};
use packtrie_query::Cursor;
use serde::Serialize;

/// One result as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Record {
    pub path: String,
    pub value: Option<u32>,
    pub jump: Option<Ptr>,
}

impl From<&Cursor<'_>> for Record {
    fn from(cursor: &Cursor<'_>) -> Self {
        Self {
            path: cursor.path(),
            value: cursor.get_value(),
            jump: cursor.get_jump(),
        }
    }
}

/// Append `cursor` as a single-line JSON object.
pub fn push_json(out: &mut String, cursor: &Cursor<'_>) -> Result<(), serde_json::Error> {
    out.push_str(&serde_json::to_string(&Record::from(cursor))?);
    out.push('\n');
    Ok(())
}

/// `"key" = value`, or `"key" -> T<jump>` for nodes without a value.
pub fn format_entry(cursor: &Cursor<'_>, colors: Colors) -> String {
    let c = colors;
    let mut line = format!("{}{:?}{}", c.green, cursor.path(), c.reset);
    if let Some(value) = cursor.get_value() {
        line.push_str(&format!(" = {}{value}{}", c.yellow, c.reset));
    }
    if let Some(jump) = cursor.get_jump() {
        line.push_str(&format!(" {}-> T{jump}{}", c.blue, c.reset));
    }
    line
}

/// Characters separated by spaces, lone surrogates shown as U+FFFD.
pub fn format_chars(chars: &[char]) -> String {
    let mut out = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*ch);
    }
    out
}
