//! Singly-linked sorted list with internal node storage.
//!
//! Nodes live in a [`slab::Slab`] arena owned by the list and link to their
//! successor by arena key. Keys are stable while a node is in the chain, and a
//! freed slot is reused by the next insertion.
//!
//! ```text
//! head ─► [1] ─► [1] ─► [3] ─► [4] ─► [5] ─► NONE
//!          │
//!          └── slab slot 1 (arrival order is not chain order)
//! ```
//!
//! # Kind lock
//!
//! The first successful insertion locks the list to that value's [`Kind`],
//! unless the list was created already locked. The lock never changes again,
//! not even on [`clear`](SortedList::clear).
//!
//! ```
//! use sorted_list::{Error, InvalidKind, Kind, SortedList};
//!
//! let mut list = SortedList::new();
//! list.insert(3)?.insert(1)?;
//! assert_eq!(list.kind(), Some(Kind::Integer));
//!
//! let err = list.insert("a").unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::InvalidKind(InvalidKind::Mixed { locked: Kind::Integer, given: Kind::Text })
//! );
//! assert_eq!(list.to_string(), "[1, 3]");
//! # Ok::<(), Error>(())
//! ```
//!
//! # Ties
//!
//! A value equal to existing ones is linked after all of them, so equal keys
//! come out first-in, first-out.
//!
//! # Thread safety
//!
//! Not synchronized. Callers that share a list across threads must serialize
//! access themselves, e.g. with a `Mutex<SortedList>` around each call.

use core::fmt;
use core::iter::FusedIterator;

use slab::Slab;
use tracing::{debug, trace};

use crate::{Error, InvalidKind, Kind, Scalar};

/// Arena key of a node.
type NodeKey = usize;

/// Sentinel link: no node.
const NONE: NodeKey = NodeKey::MAX;

#[derive(Debug, Clone)]
struct Node {
    value: Scalar,
    next: NodeKey,
}

/// An ascending, kind-homogeneous list of [`Scalar`] values.
///
/// # Example
///
/// ```
/// use sorted_list::{Scalar, SortedList};
///
/// let mut list = SortedList::new();
/// for v in [3, 1, 4, 1, 5] {
///     list.insert(v)?;
/// }
///
/// assert_eq!(list.to_string(), "[1, 1, 3, 4, 5]");
/// assert_eq!(list.remove_first()?, Scalar::Integer(1));
/// assert!(list.contains(4));
/// assert!(!list.contains(2));
/// assert_eq!(list.index_of(4), Some(2));
/// # Ok::<(), sorted_list::Error>(())
/// ```
#[derive(Clone)]
pub struct SortedList {
    nodes: Slab<Node>,
    head: NodeKey,
    len: usize,
    kind: Option<Kind>,
}

impl Default for SortedList {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedList {
    /// Creates an empty list whose kind is set by the first insertion.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            len: 0,
            kind: None,
        }
    }

    /// Creates an empty list locked to `kind`.
    ///
    /// Every insertion must match `kind`, including the first.
    pub fn with_kind(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new()
        }
    }

    /// Creates an empty list locked to the kind named by `hint`.
    ///
    /// # Errors
    ///
    /// [`InvalidKind::UnknownHint`] if `hint` is not one of `int`, `integer`,
    /// `string`, `text`.
    pub fn with_kind_name(hint: &str) -> Result<Self, Error> {
        Ok(Self::with_kind(hint.parse()?))
    }

    /// Returns the kind the list is locked to, or `None` if not yet locked.
    #[inline]
    pub const fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insert / remove
    // ========================================================================

    /// Inserts `value` at its sorted position, after any equal values.
    ///
    /// Returns the list for chaining.
    ///
    /// # Errors
    ///
    /// [`InvalidKind::Mixed`] if the value's kind differs from the locked
    /// kind. The list is unchanged on error.
    pub fn insert(&mut self, value: impl Into<Scalar>) -> Result<&mut Self, Error> {
        let value = value.into();
        self.admit(value.kind())?;

        let after = self.insertion_point(&value);
        let next = if after == NONE {
            self.head
        } else {
            self.nodes[after].next
        };

        trace!(value = %value, "insert");
        let key = self.nodes.insert(Node { value, next });

        if after == NONE {
            self.head = key;
        } else {
            self.nodes[after].next = key;
        }

        self.len += 1;
        Ok(self)
    }

    /// Inserts every value in order, stopping at the first failure.
    ///
    /// Values inserted before the failing one stay in the list.
    ///
    /// # Errors
    ///
    /// The first [`InvalidKind`] encountered.
    pub fn try_extend<I>(&mut self, values: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(self)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` if no element matched, including when `value` is of
    /// the other kind. Scans to the end on a miss.
    pub fn remove(&mut self, value: impl Into<Scalar>) -> bool {
        let value = value.into();

        let mut prev = NONE;
        let mut cursor = self.head;
        while cursor != NONE {
            if self.nodes[cursor].value == value {
                let node = self.nodes.remove(cursor);
                if prev == NONE {
                    self.head = node.next;
                } else {
                    self.nodes[prev].next = node.next;
                }
                self.len -= 1;
                trace!(value = %value, "removed");
                return true;
            }
            prev = cursor;
            cursor = self.nodes[cursor].next;
        }

        false
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<Scalar, Error> {
        if self.head == NONE {
            return Err(Error::EmptySequence { op: "first" });
        }

        let node = self.nodes.remove(self.head);
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes every element. The kind lock is kept.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clear");
        self.nodes.clear();
        self.head = NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the list is empty.
    pub fn first(&self) -> Result<&Scalar, Error> {
        if self.head == NONE {
            return Err(Error::EmptySequence { op: "first" });
        }
        Ok(&self.nodes[self.head].value)
    }

    /// Returns the largest element. Walks the whole chain.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the list is empty.
    pub fn last(&self) -> Result<&Scalar, Error> {
        self.iter().last().ok_or(Error::EmptySequence { op: "last" })
    }

    /// Returns the element at `index`, counting from the smallest.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Scalar, Error> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.iter().nth(index).ok_or(out_of_range)
    }

    /// Returns `true` if an element equals `value`.
    ///
    /// Stops at the first element greater than `value`.
    pub fn contains(&self, value: impl Into<Scalar>) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// Stops at the first element greater than `value`.
    pub fn index_of(&self, value: impl Into<Scalar>) -> Option<usize> {
        let value = value.into();
        for (index, current) in self.iter().enumerate() {
            if *current == value {
                return Some(index);
            }
            if *current > value {
                break;
            }
        }
        None
    }

    /// Copies the elements, smallest first, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the elements, smallest first.
    ///
    /// Each call starts a fresh traversal. The iterator borrows the list, so
    /// the list cannot be mutated while it is alive.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Checks `given` against the lock, locking an unlocked list.
    fn admit(&mut self, given: Kind) -> Result<(), InvalidKind> {
        match self.kind {
            None => {
                debug!(kind = %given, "kind locked");
                self.kind = Some(given);
                Ok(())
            }
            Some(locked) if locked == given => Ok(()),
            Some(locked) => Err(InvalidKind::Mixed { locked, given }),
        }
    }

    /// Key of the node `value` links after, or `NONE` to become the head.
    fn insertion_point(&self, value: &Scalar) -> NodeKey {
        let mut after = NONE;
        let mut cursor = self.head;
        while cursor != NONE && self.nodes[cursor].value <= *value {
            after = cursor;
            cursor = self.nodes[cursor].next;
        }
        after
    }
}

impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SortedList {}

/// `[]` when empty, otherwise `[v1, v2, ..., vn]`.
impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("kind", &self.kind)
            .field("len", &self.len)
            .field("elements", &Elements(self))
            .finish()
    }
}

/// Borrowed view of a list's elements, written as a sequence.
pub(crate) struct Elements<'a>(pub(crate) &'a SortedList);

impl fmt::Debug for Elements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Scalar;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Forward iterator over a list's elements, smallest first.
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: &'a Slab<Node>,
    cursor: NodeKey,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Scalar;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NONE {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
