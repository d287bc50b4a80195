//! Warehouse fulfillment queue built on [`sorted_list`].
//!
//! Orders carry a [`ShippingPriority`] tier (1 = Express ... 4 = Economy).
//! The queue keeps the tier numbers in an integer [`SortedList`] and the
//! orders themselves in arrival order; the most urgent tier is always served
//! first, and orders of the same tier are served oldest first.
//!
//! ```
//! use fulfillment::{FulfillmentQueue, OrderRequest, ShippingPriority};
//!
//! let mut queue = FulfillmentQueue::new();
//! queue.add_order(OrderRequest::new("WholesaleHub", 4, "Phoenix, AZ").weight(8.7))?;
//! let express = queue.add_order(OrderRequest::new("Medical Supply Co", 1, "Miami, FL"))?;
//!
//! let next = queue.process_next()?.unwrap();
//! assert_eq!(next.order_number, express);
//! assert_eq!(next.priority, ShippingPriority::Express);
//! assert_eq!(queue.pending_count(), 1);
//! # Ok::<(), fulfillment::Error>(())
//! ```
//!
//! Tier numbers outside `1..=4` are rejected before anything is stored:
//!
//! ```
//! use fulfillment::{Error, FulfillmentQueue, OrderRequest};
//!
//! let mut queue = FulfillmentQueue::new();
//! let err = queue.add_order(OrderRequest::new("A", 7, "B")).unwrap_err();
//! assert_eq!(err, Error::InvalidPriority(7));
//! assert_eq!(queue.pending_count(), 0);
//! ```
//!
//! [`SortedList`]: sorted_list::SortedList

#![warn(missing_docs)]

mod config;
mod error;
mod order;
mod priority;
mod queue;
mod report;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::Error;
pub use order::{LineItem, OrderRequest, ShippingOrder};
pub use priority::ShippingPriority;
pub use queue::FulfillmentQueue;
pub use report::{FulfillmentStats, QueueView};
