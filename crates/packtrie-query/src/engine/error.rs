//! Errors raised by query operations.
//!
//! A miss is not an error: lookups and enumeration return `None` when nothing
//! matches. These variants signal a caller contract violation.

use std::fmt;

use packtrie_format::Ptr;

/// What a cursor was asked for but does not have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    Value,
    Jump,
    Pointer,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Value => write!(f, "not a valid leaf: node has no value"),
            Missing::Jump => write!(f, "not a valid branch: node has no child table"),
            Missing::Pointer => write!(f, "not a valid node: cursor has an empty path"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A lookup was resumed from an entry without a child table.
    #[error("invalid branch: entry at {ptr} has no child table")]
    InvalidBranch { ptr: Ptr },

    /// A cursor accessor was called for an absent attribute.
    #[error("invalid state: {0}")]
    InvalidState(Missing),
}
