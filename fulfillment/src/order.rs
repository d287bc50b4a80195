//! Shipping orders and order requests.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ShippingPriority;

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// An accepted order, as held by the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOrder {
    /// Queue-assigned number, `SM1001`, `SM1002`, ...
    pub order_number: String,
    /// Urgency tier.
    pub priority: ShippingPriority,
    /// Customer or storefront name.
    pub customer: String,
    /// Destination city.
    pub destination: String,
    /// Product lines.
    pub items: Vec<LineItem>,
    /// Parcel weight in pounds.
    pub weight_lb: f64,
    /// Carrier service.
    pub shipping_method: String,
    /// When the queue accepted the order.
    pub order_time: DateTime<Utc>,
    /// Delivery promised to the customer, if any.
    pub promised_delivery: Option<DateTime<Utc>>,
}

impl ShippingOrder {
    /// Total units across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// `5x iPhone Cases, 10x Screen Protectors`.
    pub fn items_description(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `SM1001 [Express] - Customer → Destination | 3x Foo | 1.2lb (Delivery: 20/10 10:00)`
impl fmt::Display for ShippingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - {} → {} | {} | {:.1}lb",
            self.order_number,
            self.priority,
            self.customer,
            self.destination,
            self.items_description(),
            self.weight_lb,
        )?;
        if let Some(promised) = self.promised_delivery {
            write!(f, " (Delivery: {})", promised.format("%d/%m %H:%M"))?;
        }
        Ok(())
    }
}

/// An order as submitted, before the queue validates and numbers it.
///
/// `priority` is a raw tier number; the queue rejects anything outside
/// `1..=4`.
///
/// ```
/// use fulfillment::OrderRequest;
///
/// let request = OrderRequest::new("Medical Supply Co", 1, "Miami, FL")
///     .item("Medical Devices", 3)
///     .item("Safety Equipment", 10)
///     .weight(5.1)
///     .method("ShipMonk Priority Overnight");
/// assert_eq!(request.items.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Customer or storefront name.
    pub customer: String,
    /// Raw tier number.
    pub priority: i64,
    /// Destination city.
    pub destination: String,
    /// Product lines.
    pub items: Vec<LineItem>,
    /// Parcel weight in pounds.
    pub weight_lb: f64,
    /// Carrier service.
    pub shipping_method: String,
    /// Delivery promised to the customer, if any.
    pub promised_delivery: Option<DateTime<Utc>>,
}

impl OrderRequest {
    /// Starts a request with no items, zero weight and ground shipping.
    pub fn new(customer: impl Into<String>, priority: i64, destination: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            priority,
            destination: destination.into(),
            items: Vec::new(),
            weight_lb: 0.0,
            shipping_method: "Ground".to_owned(),
            promised_delivery: None,
        }
    }

    /// Adds a product line.
    #[must_use]
    pub fn item(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.items.push(LineItem::new(name, quantity));
        self
    }

    /// Sets the parcel weight in pounds.
    #[must_use]
    pub fn weight(mut self, weight_lb: f64) -> Self {
        self.weight_lb = weight_lb;
        self
    }

    /// Sets the carrier service.
    #[must_use]
    pub fn method(mut self, shipping_method: impl Into<String>) -> Self {
        self.shipping_method = shipping_method.into();
        self
    }

    /// Sets the promised delivery time.
    #[must_use]
    pub fn promised(mut self, at: DateTime<Utc>) -> Self {
        self.promised_delivery = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order() -> ShippingOrder {
        ShippingOrder {
            order_number: "SM1001".into(),
            priority: ShippingPriority::Standard,
            customer: "Amazon Store - ElectroShop".into(),
            destination: "Los Angeles, CA".into(),
            items: vec![
                LineItem::new("iPhone Cases", 5),
                LineItem::new("Screen Protectors", 10),
            ],
            weight_lb: 0.8,
            shipping_method: "ShipMonk Ground".into(),
            order_time: Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap(),
            promised_delivery: None,
        }
    }

    #[test]
    fn totals() {
        let order = order();
        assert_eq!(order.total_items(), 15);
        assert_eq!(
            order.items_description(),
            "5x iPhone Cases, 10x Screen Protectors"
        );
    }

    #[test]
    fn display_without_promise() {
        assert_eq!(
            order().to_string(),
            "SM1001 [Standard] - Amazon Store - ElectroShop → Los Angeles, CA \
             | 5x iPhone Cases, 10x Screen Protectors | 0.8lb"
        );
    }

    #[test]
    fn display_with_promise() {
        let mut order = order();
        order.promised_delivery = Some(Utc.with_ymd_and_hms(2026, 10, 21, 17, 0, 0).unwrap());
        assert!(order.to_string().ends_with("| 0.8lb (Delivery: 21/10 17:00)"));
    }

    #[test]
    fn request_builder() {
        let at = Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap();
        let request = OrderRequest::new("A", 2, "B")
            .item("x", 1)
            .weight(1.5)
            .method("FedEx 2-Day")
            .promised(at);

        assert_eq!(request.priority, 2);
        assert_eq!(request.items, vec![LineItem::new("x", 1)]);
        assert_eq!(request.weight_lb, 1.5);
        assert_eq!(request.shipping_method, "FedEx 2-Day");
        assert_eq!(request.promised_delivery, Some(at));
    }
}
