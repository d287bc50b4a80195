//! Constructors for pre-locked and bulk-loaded lists.

use serde_json::Value;

use crate::scalar::json_type_name;
use crate::{Error, InvalidKind, Kind, Scalar, SortedList};

/// Empty list locked to integers.
pub fn for_integers() -> SortedList {
    SortedList::with_kind(Kind::Integer)
}

/// Empty list locked to text.
pub fn for_text() -> SortedList {
    SortedList::with_kind(Kind::Text)
}

/// Builds an unlocked list and inserts `values` in iteration order.
///
/// # Errors
///
/// The first [`InvalidKind`] encountered; mixed input aborts the build.
///
/// # Example
///
/// ```
/// use sorted_list::factory;
///
/// let list = factory::from_values(["pear", "apple"])?;
/// assert_eq!(list.to_string(), "[apple, pear]");
///
/// assert!(factory::from_values(Vec::<i64>::new())?.kind().is_none());
/// # Ok::<(), sorted_list::Error>(())
/// ```
pub fn from_values<I>(values: I) -> Result<SortedList, Error>
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    let mut list = SortedList::new();
    list.try_extend(values)?;
    Ok(list)
}

/// Builds a list from a JSON array of integers or strings.
///
/// # Errors
///
/// [`InvalidKind::Unsupported`] if `json` is not an array or an element is
/// neither an integer nor a string; [`InvalidKind::Mixed`] on mixed elements.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sorted_list::factory;
///
/// let list = factory::from_json(&json!([5, 3, 5, 1]))?;
/// assert_eq!(list.to_string(), "[1, 3, 5, 5]");
///
/// assert!(factory::from_json(&json!([1, "a"])).is_err());
/// assert!(factory::from_json(&json!([1, 2.5])).is_err());
/// # Ok::<(), sorted_list::Error>(())
/// ```
pub fn from_json(json: &Value) -> Result<SortedList, Error> {
    let Value::Array(items) = json else {
        return Err(InvalidKind::Unsupported {
            given: format!("{} (expected an array)", json_type_name(json)),
        }
        .into());
    };

    let mut list = SortedList::new();
    for item in items {
        list.insert(Scalar::try_from(item)?)?;
    }
    Ok(list)
}
