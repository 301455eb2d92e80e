//! Query engine over a [`Trie`](packtrie_format::Trie).
//!
//! [`Query`] bundles the table enumerator, match engine and traversal engine.
//! Every operation is a fresh read of the immutable word array; the only
//! state carried between calls is the ancestor path held by a [`Cursor`].

mod cursor;
mod error;
mod find;
mod query;
mod table;
mod trace;
mod walk;

#[cfg(test)]
mod find_tests;
#[cfg(test)]
mod table_tests;
#[cfg(test)]
mod trace_tests;

pub use cursor::{Cursor, decode_path};
pub use error::{Missing, QueryError};
pub use query::Query;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use walk::{Descendants, Entries};
