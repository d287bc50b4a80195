//! Error types for sorted list operations.
//!
//! Every failure is a precondition violation detected before any mutation,
//! so a failed call leaves the list exactly as it was.

use crate::Kind;

/// A value or kind hint the list cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKind {
    /// The value is neither an integer nor text.
    #[error("only integer and text values are supported, {given} given")]
    Unsupported {
        /// Description of what was given instead.
        given: String,
    },

    /// A kind hint that names neither kind.
    #[error("the only allowed kinds are integer, text; given: {given}")]
    UnknownHint {
        /// The hint as given.
        given: String,
    },

    /// The value's kind differs from the kind the list is locked to.
    #[error("mixed kinds not allowed: list contains {locked} values, {given} given")]
    Mixed {
        /// Kind the list is locked to.
        locked: Kind,
        /// Kind of the rejected value.
        given: Kind,
    },
}

/// Errors returned by [`SortedList`](crate::SortedList).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bad kind hint, unsupported value, or mixed kinds.
    #[error(transparent)]
    InvalidKind(#[from] InvalidKind),

    /// Peek or pop on an empty list.
    #[error("list is empty, cannot get {op} element")]
    EmptySequence {
        /// Which end was requested (`"first"` or `"last"`).
        op: &'static str,
    },

    /// Positional access outside `0..len`.
    #[error("index {index} out of bounds for size {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// List length at the time of the call.
        len: usize,
    },

    /// A snapshot whose recorded size disagrees with its elements.
    #[error("snapshot records size {recorded} but holds {actual} elements")]
    SizeMismatch {
        /// The `size` field of the snapshot.
        recorded: usize,
        /// Number of entries in `elements`.
        actual: usize,
    },
}

impl Error {
    /// Returns `true` for [`Error::EmptySequence`].
    #[inline]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Error::EmptySequence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let mixed = Error::from(InvalidKind::Mixed {
            locked: Kind::Integer,
            given: Kind::Text,
        });
        assert_eq!(
            mixed.to_string(),
            "mixed kinds not allowed: list contains integer values, text given"
        );

        let empty = Error::EmptySequence { op: "last" };
        assert_eq!(empty.to_string(), "list is empty, cannot get last element");
        assert!(empty.is_empty_sequence());

        let oob = Error::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(oob.to_string(), "index 3 out of bounds for size 3");
        assert!(!oob.is_empty_sequence());
    }
}
