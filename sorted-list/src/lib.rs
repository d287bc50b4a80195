//! Sorted singly-linked list of integers or strings.
//!
//! [`SortedList`] keeps its elements in ascending order at all times and
//! holds exactly one [`Kind`] of [`Scalar`]. The kind is either fixed at
//! construction or taken from the first value inserted; after that, values of
//! the other kind are rejected.
//!
//! ```text
//! SortedList
//!   kind: Some(Integer)
//!   len:  4
//!   head ─► 1 ─► 2 ─► 2 ─► 7 ─► NONE      (nodes in a slab arena)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sorted_list::{factory, Scalar, SortedList};
//!
//! let mut tiers = factory::for_integers();
//! tiers.insert(3)?.insert(1)?.insert(2)?;
//!
//! assert_eq!(tiers.first()?, &Scalar::Integer(1));
//! assert_eq!(tiers.remove_first()?, Scalar::Integer(1));
//! assert_eq!(tiers.len(), 2);
//!
//! let words = factory::from_values(["pear", "apple", "fig"])?;
//! assert_eq!(words.to_string(), "[apple, fig, pear]");
//! # Ok::<(), sorted_list::Error>(())
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert` | O(n) | after equal values (FIFO ties) |
//! | `remove` | O(n) | first equal element, full scan on miss |
//! | `contains` / `index_of` | O(n) | stops at the first larger element |
//! | `first` / `remove_first` | O(1) | |
//! | `last` | O(n) | walks to the tail |
//! | `get` | O(n) | walks `index` links |
//! | `len` / `is_empty` | O(1) | |
//!
//! # Errors
//!
//! Failures are checked before any mutation and returned as [`Error`]:
//! [`Error::InvalidKind`] for bad hints and mixed or unsupported values,
//! [`Error::EmptySequence`] for peeking or popping an empty list, and
//! [`Error::IndexOutOfRange`] for positional access past the end. Lookups
//! (`remove`, `contains`, `index_of`) never fail; absence is `false`/`None`.
//!
//! # Serialization
//!
//! A list serializes as `{ "kind", "size", "elements" }` and deserializes by
//! re-inserting the elements. See [`Snapshot`].
//!
//! # Thread safety
//!
//! Single-threaded. Wrap in a `Mutex` to share.

#![warn(missing_docs)]

mod error;
pub mod factory;
mod list;
mod scalar;
mod snapshot;

pub use error::{Error, InvalidKind};
pub use list::{Iter, SortedList};
pub use scalar::{Kind, Scalar};
pub use snapshot::Snapshot;
