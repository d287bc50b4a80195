//! Errors surfaced by the fulfillment queue.

/// Errors returned by [`FulfillmentQueue`](crate::FulfillmentQueue).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A priority tier outside `1..=4`.
    #[error("priority must be between 1 (Express) and 4 (Economy), got {0}")]
    InvalidPriority(i64),

    /// The underlying tier list rejected an operation.
    #[error(transparent)]
    Sequence(#[from] sorted_list::Error),
}
