//! Structured export and restore.
//!
//! A list serializes as
//!
//! ```text
//! { "kind": "integer" | "text" | null, "size": n, "elements": [v1, ..., vn] }
//! ```
//!
//! Restoring re-inserts every element, so ordering and homogeneity are
//! checked again rather than trusted.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::list::Elements;
use crate::{Error, Kind, Scalar, SortedList};

/// Owned structured record of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Locked kind, `None` if the list was never locked.
    pub kind: Option<Kind>,
    /// Number of elements.
    pub size: usize,
    /// Elements, smallest first.
    pub elements: Vec<Scalar>,
}

impl SortedList {
    /// Returns the list as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            size: self.len(),
            elements: self.to_vec(),
        }
    }
}

impl TryFrom<Snapshot> for SortedList {
    type Error = Error;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let Snapshot {
            kind,
            size,
            elements,
        } = snapshot;

        if size != elements.len() {
            return Err(Error::SizeMismatch {
                recorded: size,
                actual: elements.len(),
            });
        }

        let mut list = match kind {
            Some(kind) => SortedList::with_kind(kind),
            None => SortedList::new(),
        };
        list.try_extend(elements)?;
        Ok(list)
    }
}

impl Serialize for SortedList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SortedList", 3)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("size", &self.len())?;
        state.serialize_field("elements", &Elements(self))?;
        state.end()
    }
}

impl Serialize for Elements<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for SortedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = Snapshot::deserialize(deserializer)?;
        SortedList::try_from(snapshot).map_err(serde::de::Error::custom)
    }
}
