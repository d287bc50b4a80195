//! Priority-tiered fulfillment queue.
//!
//! Each accepted order contributes its tier number to an integer-locked
//! [`SortedList`]. Dequeuing pops the smallest tier and hands out the oldest
//! pending order of that tier.
//!
//! ```text
//! tiers:  [1, 1, 2, 3, 3, 4]        (SortedList, ascending)
//! orders: SM1001(3) SM1002(2) SM1003(1) SM1004(3) SM1005(4) SM1006(1)
//!                               ^
//!                               process_next() serves SM1003 first
//! ```

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use sorted_list::{factory, Scalar, Snapshot, SortedList};
use tracing::{debug, info, warn};

use crate::report::{FulfillmentStats, QueueView};
use crate::{Error, OrderRequest, ShippingOrder, ShippingPriority};

/// Orders promised within this window of "now" are reported at risk.
const AT_RISK_WINDOW_HOURS: i64 = 24;

/// Queue of shipping orders, served most urgent tier first.
///
/// # Example
///
/// ```
/// use fulfillment::{FulfillmentQueue, OrderRequest, ShippingPriority};
///
/// let mut queue = FulfillmentQueue::new();
/// queue.add_order(OrderRequest::new("Ground shop", 3, "Chicago, IL"))?;
/// let express = queue.add_order(OrderRequest::new("Clinic", 1, "Miami, FL"))?;
///
/// assert_eq!(queue.pending_count(), 2);
/// assert!(queue.has_express_orders());
///
/// let next = queue.process_next()?.unwrap();
/// assert_eq!(next.order_number, express);
/// assert_eq!(next.priority, ShippingPriority::Express);
/// # Ok::<(), fulfillment::Error>(())
/// ```
#[derive(Debug)]
pub struct FulfillmentQueue {
    tiers: SortedList,
    orders: IndexMap<String, ShippingOrder>,
    next_order_id: u64,
}

impl Default for FulfillmentQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FulfillmentQueue {
    /// Number given to the first accepted order.
    pub const FIRST_ORDER_ID: u64 = 1001;

    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            tiers: factory::for_integers(),
            orders: IndexMap::new(),
            next_order_id: Self::FIRST_ORDER_ID,
        }
    }

    /// Accepts an order stamped with the current time.
    ///
    /// Returns the assigned order number.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPriority`] if the requested tier is outside `1..=4`.
    pub fn add_order(&mut self, request: OrderRequest) -> Result<String, Error> {
        self.add_order_at(request, Utc::now())
    }

    /// Accepts an order stamped with `order_time`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPriority`] if the requested tier is outside `1..=4`.
    pub fn add_order_at(
        &mut self,
        request: OrderRequest,
        order_time: DateTime<Utc>,
    ) -> Result<String, Error> {
        let priority = ShippingPriority::try_from(request.priority)?;
        self.tiers.insert(priority.tier())?;

        let order_number = format!("SM{}", self.next_order_id);
        self.next_order_id += 1;

        let order = ShippingOrder {
            order_number: order_number.clone(),
            priority,
            customer: request.customer,
            destination: request.destination,
            items: request.items,
            weight_lb: request.weight_lb,
            shipping_method: request.shipping_method,
            order_time,
            promised_delivery: request.promised_delivery,
        };

        info!(order = %order_number, %priority, pending = self.tiers.len(), "order accepted");
        self.orders.insert(order_number.clone(), order);
        Ok(order_number)
    }

    /// Removes and returns the next order to service.
    ///
    /// Returns `Ok(None)` when nothing is pending.
    ///
    /// # Errors
    ///
    /// Only if the tier list fails, which an internally consistent queue
    /// never does.
    pub fn process_next(&mut self) -> Result<Option<ShippingOrder>, Error> {
        if self.tiers.is_empty() {
            debug!("no pending orders");
            return Ok(None);
        }

        let tier = self.tiers.remove_first()?;
        let Some(index) = self.position_of_tier(&tier, 0) else {
            warn!(%tier, "tier popped with no matching order");
            return Ok(None);
        };

        let order = self.orders.shift_remove_index(index).map(|(_, order)| order);
        if let Some(order) = &order {
            info!(
                order = %order.order_number,
                priority = %order.priority,
                pending = self.tiers.len(),
                "order processing"
            );
        }
        Ok(order)
    }

    /// Returns the order [`process_next`](Self::process_next) would serve.
    pub fn peek_next(&self) -> Option<&ShippingOrder> {
        let tier = self.tiers.first().ok()?;
        let index = self.position_of_tier(tier, 0)?;
        self.orders.get_index(index).map(|(_, order)| order)
    }

    /// Looks up a pending order by number.
    pub fn find_order(&self, order_number: &str) -> Option<&ShippingOrder> {
        self.orders.get(order_number)
    }

    /// Number of pending orders.
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.tiers.len()
    }

    /// Returns `true` if any Express order is pending.
    pub fn has_express_orders(&self) -> bool {
        self.tiers.contains(ShippingPriority::Express.tier())
    }

    /// Pending orders whose promised delivery falls before `now` + 24h.
    pub fn orders_at_risk(&self, now: DateTime<Utc>) -> Vec<&ShippingOrder> {
        let deadline = now + Duration::hours(AT_RISK_WINDOW_HOURS);
        self.orders
            .values()
            .filter(|order| order.promised_delivery.is_some_and(|at| at < deadline))
            .collect()
    }

    /// Pending orders in the order they will be served.
    pub fn service_order(&self) -> Vec<&ShippingOrder> {
        let mut taken = vec![false; self.orders.len()];
        let mut served = Vec::with_capacity(self.orders.len());

        for tier in self.tiers.to_vec() {
            let mut from = 0;
            while let Some(index) = self.position_of_tier(&tier, from) {
                if !taken[index] {
                    taken[index] = true;
                    if let Some((_, order)) = self.orders.get_index(index) {
                        served.push(order);
                    }
                    break;
                }
                from = index + 1;
            }
        }

        served
    }

    /// Per-tier counts and totals over the pending orders.
    pub fn stats(&self) -> FulfillmentStats {
        let mut stats = FulfillmentStats {
            total_orders: self.tiers.len(),
            ..FulfillmentStats::default()
        };
        for order in self.orders.values() {
            stats.by_priority[FulfillmentStats::slot(order.priority)] += 1;
            stats.total_weight_lb += order.weight_lb;
            stats.total_items += order.total_items();
        }
        stats
    }

    /// Display adapter listing pending orders in service order.
    pub fn view(&self) -> QueueView<'_> {
        QueueView::new(self.service_order())
    }

    /// Structured export of the pending tier list.
    pub fn tier_snapshot(&self) -> Snapshot {
        self.tiers.snapshot()
    }

    /// First pending order at or after `from` whose tier equals `tier`.
    fn position_of_tier(&self, tier: &Scalar, from: usize) -> Option<usize> {
        let tier = tier.as_integer()?;
        self.orders
            .values()
            .skip(from)
            .position(|order| order.priority.tier() == tier)
            .map(|offset| from + offset)
    }
}
