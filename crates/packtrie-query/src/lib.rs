//! Lookup and enumeration engine for packed word tries.
//!
//! The engine reads the flat word array directly: exact-path lookup walks
//! one table per code unit, and enumeration keeps an explicit stack of
//! ancestor pointers so a walk can be paused and resumed from any cursor.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Cursor, Descendants, Entries, Missing, NoopTracer, PrintTracer, Query, QueryError, Tracer,
    Verbosity, decode_path,
};
pub use packtrie_format::{Ptr, ROOT, Trie};
