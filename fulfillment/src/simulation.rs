//! Replays a typical morning shift through a [`FulfillmentQueue`].
//!
//! Six orders arrive between 6:00 and 8:15, the shift processes up to
//! [`SimulationConfig::shift_orders`] of them, and whatever is left is
//! reported for the second shift.

use std::io::Write;
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{DateTime, Days, Duration, Utc};
use sorted_list::Snapshot;
use tracing::info;

use crate::{FulfillmentQueue, OrderRequest, ShippingOrder, ShippingPriority, SimulationConfig};

/// An order request arriving at a point in the shift.
#[derive(Debug, Clone)]
pub struct Arrival {
    /// Headline printed when the order arrives.
    pub label: &'static str,
    /// Arrival time.
    pub at: DateTime<Utc>,
    /// The order as submitted.
    pub request: OrderRequest,
}

/// Outcome of a simulated shift.
#[derive(Debug, Clone)]
pub struct ShiftSummary {
    /// Orders accepted into the queue.
    pub accepted: usize,
    /// Orders processed, in service order.
    pub processed: Vec<ShippingOrder>,
    /// Orders left for the next shift.
    pub pending: usize,
    /// Whether any Express order is left.
    pub express_pending: bool,
    /// Remaining priority tiers.
    pub tiers: Snapshot,
}

/// `days` after `start`'s date, at `hour:minute`.
fn on_day(start: DateTime<Utc>, days: u64, hour: u32, minute: u32) -> DateTime<Utc> {
    start
        .date_naive()
        .checked_add_days(Days::new(days))
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .map_or(start, |at| at.and_utc())
}

/// The morning's orders, relative to a shift starting at `start`.
pub fn morning_arrivals(start: DateTime<Utc>) -> Vec<Arrival> {
    let after = |minutes: i64| start + Duration::minutes(minutes);

    vec![
        Arrival {
            label: "6:00 AM - E-commerce night orders",
            at: after(0),
            request: OrderRequest::new("Amazon Store - ElectroShop", 3, "Los Angeles, CA")
                .item("iPhone Cases", 5)
                .item("Screen Protectors", 10)
                .weight(0.8)
                .method("ShipMonk Ground"),
        },
        Arrival {
            label: "6:30 AM - Premium orders from VIP clients",
            at: after(30),
            request: OrderRequest::new("Shopify Store - FashionBrand", 2, "New York, NY")
                .item("Designer T-Shirts", 3)
                .item("Branded Hoodies", 2)
                .weight(1.2)
                .method("FedEx 2-Day")
                .promised(on_day(start, 2, 17, 0)),
        },
        Arrival {
            label: "7:00 AM - B2B Express",
            at: after(60),
            request: OrderRequest::new("Corporate Client - Dr. Squatch", 1, "Marina del Rey, CA")
                .item("Rugged & Ready 4-Pack", 100)
                .item("Deodorant 6-Pack", 20)
                .weight(15.5)
                .method("ShipMonk Overnight")
                .promised(on_day(start, 1, 10, 0)),
        },
        Arrival {
            label: "7:30 AM - Standard orders",
            at: after(90),
            request: OrderRequest::new("WooCommerce - HomeDecor", 3, "Chicago, IL")
                .item("Decorative Pillows", 4)
                .item("Wall Art", 2)
                .weight(3.2)
                .method("ShipMonk 3-Day Select"),
        },
        Arrival {
            label: "8:00 AM - Economy bulk orders",
            at: after(120),
            request: OrderRequest::new("Bulk Reseller - WholesaleHub", 4, "Phoenix, AZ")
                .item("Phone Accessories", 50)
                .item("Chargers", 25)
                .weight(8.7)
                .method("ShipMonk Ground Advantage"),
        },
        Arrival {
            label: "8:15 AM - Another critical Express order",
            at: after(135),
            request: OrderRequest::new("Medical Supply Co", 1, "Miami, FL")
                .item("Medical Devices", 3)
                .item("Safety Equipment", 10)
                .weight(5.1)
                .method("ShipMonk Priority Overnight")
                .promised(on_day(start, 1, 8, 0)),
        },
    ]
}

fn write_stats<W: Write>(queue: &FulfillmentQueue, out: &mut W) -> Result<()> {
    if queue.pending_count() == 0 {
        writeln!(out, "The fulfillment queue is empty")?;
    } else {
        write!(out, "{}", queue.stats())?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs the shift, writing the console report to `out`.
///
/// `start` is the shift start (6:00 AM in the report). Delivery promises are
/// checked for SLA risk as of the last morning arrival.
///
/// # Errors
///
/// Fails if writing to `out` fails or the queue rejects an order.
pub fn run<W: Write>(
    config: &SimulationConfig,
    start: DateTime<Utc>,
    out: &mut W,
) -> Result<ShiftSummary> {
    let mut queue = FulfillmentQueue::new();

    writeln!(out, "SIMULATION: Typical day")?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out)?;

    let tiers = ShippingPriority::ALL
        .iter()
        .map(|p| format!("{}={} (SLA {})", p.tier(), p.label(), p.sla()))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Priorities: {tiers}")?;
    writeln!(out)?;

    let arrivals = morning_arrivals(start);
    let accepted = arrivals.len();
    let mut checked_at = start;
    for arrival in arrivals {
        checked_at = arrival.at;
        writeln!(out, "{}", arrival.label)?;
        let number = queue
            .add_order_at(arrival.request, arrival.at)
            .with_context(|| format!("accepting order for {}", arrival.label))?;
        if let Some(order) = queue.find_order(&number) {
            writeln!(out, "New order has been added: {order}")?;
        }
        writeln!(out, "{}", queue.view())?;
    }

    write_stats(&queue, out)?;

    let at_risk = queue.orders_at_risk(checked_at);
    if !at_risk.is_empty() {
        writeln!(out, "SLA RISK ORDERS:")?;
        for order in at_risk {
            writeln!(out, "   {} - {}", order.order_number, order.customer)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "LAUNCHING FULFILLMENT - Warehouse Operations")?;
    writeln!(out, "{}", "-".repeat(50))?;

    let mut processed = Vec::new();
    while queue.pending_count() > 0 && processed.len() < config.shift_orders {
        if let Some(next) = queue.peek_next() {
            writeln!(out, "Next order in line: {}", next.order_number)?;
            writeln!(out, "Priority: {} - {}", next.priority.tier(), next.customer)?;
        }

        let Some(order) = queue.process_next()? else {
            break;
        };
        writeln!(out, "Order is being processed: {order}")?;
        writeln!(out, "{}", queue.view())?;
        writeln!(
            out,
            "Estimated time of processing: {} minutes",
            order.priority.processing_minutes()
        )?;
        writeln!(out, "Order is ready to ship: {order}")?;
        writeln!(out)?;
        processed.push(order);

        if config.pace_ms > 0 {
            thread::sleep(StdDuration::from_millis(config.pace_ms));
        }
    }

    writeln!(out, "Stats after the morning shift:")?;
    write_stats(&queue, out)?;

    let pending = queue.pending_count();
    let express_pending = queue.has_express_orders();
    if pending > 0 {
        writeln!(out, "We still have {pending} pending orders for the 2nd shift")?;
        if express_pending {
            writeln!(
                out,
                "ATTENTION! There are Express pending orders - please prioritize them"
            )?;
        }
        writeln!(out)?;
    } else {
        writeln!(out, "All orders from the morning shift were processed!")?;
    }

    info!(accepted, processed = processed.len(), pending, "shift finished");

    Ok(ShiftSummary {
        accepted,
        processed,
        pending,
        express_pending,
        tiers: queue.tier_snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn promised_times_land_on_later_days() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap();
        assert_eq!(
            on_day(start, 2, 17, 0),
            Utc.with_ymd_and_hms(2026, 10, 21, 17, 0, 0).unwrap()
        );
        assert_eq!(
            on_day(start, 1, 8, 0),
            Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn arrivals_are_chronological() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap();
        let arrivals = morning_arrivals(start);
        assert_eq!(arrivals.len(), 6);
        assert!(arrivals.windows(2).all(|w| w[0].at < w[1].at));
    }
}
