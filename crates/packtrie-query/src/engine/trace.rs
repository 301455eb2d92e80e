//! Tracing infrastructure for debugging lookups and walks.
//!
//! The engines report every step to a [`Tracer`]. With [`NoopTracer`] all
//! hooks are empty `#[inline(always)]` functions and compile away, so the
//! untraced entry points (`find`, `next`) pay nothing. [`PrintTracer`]
//! collects one formatted line per event.

use packtrie_format::{Colors, Entry, Ptr, Trie, width_for_count};

use super::cursor::decode_path;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Descend, backtrack, yield and miss only.
    #[default]
    Default,
    /// Also every scanned entry, placeholder and table start (-v).
    Verbose,
}

/// Observer for engine execution.
///
/// Each method is called at a specific point:
/// - `trace_enter_table` - when a scan starts at a table
/// - `trace_entry` - for every entry read during a scan
/// - `trace_placeholder` - when a placeholder is skipped
/// - `trace_descend` - before moving into an entry's child table
/// - `trace_backtrack` - when a terminator sends the walk back to a parent
/// - `trace_yield` - when a result is produced
/// - `trace_miss` - when the operation ends without a result
pub trait Tracer {
    fn trace_enter_table(&mut self, start: Ptr);

    fn trace_entry(&mut self, entry: &Entry);

    fn trace_placeholder(&mut self, ptr: Ptr);

    fn trace_descend(&mut self, entry: &Entry);

    fn trace_backtrack(&mut self, parent: Ptr);

    fn trace_yield(&mut self, path: &[Ptr], value: Option<u32>);

    fn trace_miss(&mut self);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter_table(&mut self, _start: Ptr) {}

    #[inline(always)]
    fn trace_entry(&mut self, _entry: &Entry) {}

    #[inline(always)]
    fn trace_placeholder(&mut self, _ptr: Ptr) {}

    #[inline(always)]
    fn trace_descend(&mut self, _entry: &Entry) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _parent: Ptr) {}

    #[inline(always)]
    fn trace_yield(&mut self, _path: &[Ptr], _value: Option<u32>) {}

    #[inline(always)]
    fn trace_miss(&mut self) {}
}

/// Tracer that collects execution trace lines.
pub struct PrintTracer<'t> {
    trie: &'t Trie,
    verbosity: Verbosity,
    lines: Vec<String>,
    /// Pointer width for formatting.
    ptr_width: usize,
    colors: Colors,
}

impl<'t> PrintTracer<'t> {
    pub fn new(trie: &'t Trie, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            trie,
            verbosity,
            lines: Vec::new(),
            ptr_width: width_for_count(trie.len()),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn push_step(&mut self, ptr: Ptr, action: &str, detail: String) {
        let c = self.colors;
        let w = self.ptr_width;
        let line = if detail.is_empty() {
            format!("  {ptr:0w$}  {}{action}{}", c.blue, c.reset)
        } else {
            format!("  {ptr:0w$}  {}{action}{} {detail}", c.blue, c.reset)
        };
        self.lines.push(line);
    }

    fn format_code(&self, code: u16) -> String {
        let c = self.colors;
        match char::from_u32(code as u32) {
            Some(ch) => format!("{}{ch:?}{}", c.green, c.reset),
            None => format!("{}U+{code:04X}{}", c.green, c.reset),
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_enter_table(&mut self, start: Ptr) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let w = self.ptr_width;
        self.lines.push(format!("{}T{start:0w$}{}:", c.dim, c.reset));
    }

    fn trace_entry(&mut self, entry: &Entry) {
        if !self.verbose() {
            return;
        }
        let detail = self.format_code(entry.code);
        self.push_step(entry.ptr, "scan", detail);
    }

    fn trace_placeholder(&mut self, ptr: Ptr) {
        if !self.verbose() {
            return;
        }
        self.push_step(ptr, "skip", "<placeholder>".to_string());
    }

    fn trace_descend(&mut self, entry: &Entry) {
        let w = self.ptr_width;
        let mut detail = self.format_code(entry.code);
        if let Some(jump) = entry.jump {
            detail.push_str(&format!(" -> T{jump:0w$}"));
        }
        self.push_step(entry.ptr, "descend", detail);
    }

    fn trace_backtrack(&mut self, parent: Ptr) {
        let detail = self.format_code(self.trie.code(i64::from(parent)));
        self.push_step(parent, "backtrack", detail);
    }

    fn trace_yield(&mut self, path: &[Ptr], value: Option<u32>) {
        let c = self.colors;
        let Some(&ptr) = path.last() else {
            return;
        };
        let mut detail = format!("{:?}", decode_path(self.trie, path));
        if let Some(value) = value {
            detail.push_str(&format!(" = {}{value}{}", c.yellow, c.reset));
        }
        self.push_step(ptr, "yield", detail);
    }

    fn trace_miss(&mut self) {
        let c = self.colors;
        self.lines.push(format!("  {}miss{}", c.dim, c.reset));
    }
}
