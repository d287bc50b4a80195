//! Console reports over the queue.

use core::fmt;

use serde::Serialize;

use crate::{ShippingOrder, ShippingPriority};

/// Per-tier counts and totals over pending orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FulfillmentStats {
    /// Pending orders per tier, Express first.
    pub by_priority: [usize; 4],
    /// Pending orders overall.
    pub total_orders: usize,
    /// Summed weight in pounds.
    pub total_weight_lb: f64,
    /// Summed units.
    pub total_items: u64,
}

impl FulfillmentStats {
    /// Index of `priority` in [`by_priority`](Self::by_priority).
    pub(crate) const fn slot(priority: ShippingPriority) -> usize {
        priority as usize - 1
    }

    /// Pending orders of one tier.
    pub fn count(&self, priority: ShippingPriority) -> usize {
        self.by_priority[Self::slot(priority)]
    }
}

impl fmt::Display for FulfillmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fulfillment Stats:")?;
        for priority in ShippingPriority::ALL {
            writeln!(
                f,
                "{} ({}): {} orders",
                priority.label().to_uppercase(),
                priority.tier(),
                self.count(priority)
            )?;
        }
        writeln!(f, "   ═══════════════════════════")?;
        writeln!(f, "TOTAL ORDERS: {}", self.total_orders)?;
        writeln!(f, "TOTAL WEIGHT: {:.1} pounds", self.total_weight_lb)?;
        writeln!(f, "TOTAL ITEMS: {}", self.total_items)
    }
}

/// Pending orders listed in service order.
#[derive(Debug, Clone)]
pub struct QueueView<'a> {
    orders: Vec<&'a ShippingOrder>,
}

impl<'a> QueueView<'a> {
    pub(crate) fn new(orders: Vec<&'a ShippingOrder>) -> Self {
        Self { orders }
    }

    /// Orders in the listing.
    pub fn orders(&self) -> &[&'a ShippingOrder] {
        &self.orders
    }
}

impl fmt::Display for QueueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fulfillment queue:")?;
        if self.orders.is_empty() {
            return writeln!(f, "   (Empty - ready for new orders)");
        }
        for (position, order) in self.orders.iter().enumerate() {
            writeln!(f, "   {}. {}", position + 1, order)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_report() {
        let stats = FulfillmentStats {
            by_priority: [2, 1, 2, 1],
            total_orders: 6,
            total_weight_lb: 34.5,
            total_items: 231,
        };
        let text = stats.to_string();
        assert!(text.starts_with("Fulfillment Stats:\nEXPRESS (1): 2 orders\n"));
        assert!(text.contains("ECONOMY (4): 1 orders\n"));
        assert!(text.ends_with("TOTAL ORDERS: 6\nTOTAL WEIGHT: 34.5 pounds\nTOTAL ITEMS: 231\n"));
        assert_eq!(stats.count(ShippingPriority::Standard), 2);
    }

    #[test]
    fn empty_view() {
        let view = QueueView::new(Vec::new());
        assert_eq!(
            view.to_string(),
            "Fulfillment queue:\n   (Empty - ready for new orders)\n"
        );
    }
}
