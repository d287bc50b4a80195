//! Shipping priority tiers.
//!
//! Lower tier numbers are more urgent and are served first.
//!
//! | Tier | Priority | SLA | Processing |
//! |------|----------|-----|------------|
//! | 1 | Express | 1 day | 15 min |
//! | 2 | Premium | 2 days | 25 min |
//! | 3 | Standard | 3-5 days | 35 min |
//! | 4 | Economy | 7-10 days | 45 min |

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Urgency tier of a shipping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ShippingPriority {
    /// Tier 1.
    Express = 1,
    /// Tier 2.
    Premium = 2,
    /// Tier 3.
    Standard = 3,
    /// Tier 4.
    Economy = 4,
}

impl ShippingPriority {
    /// All tiers, most urgent first.
    pub const ALL: [ShippingPriority; 4] = [
        ShippingPriority::Express,
        ShippingPriority::Premium,
        ShippingPriority::Standard,
        ShippingPriority::Economy,
    ];

    /// Tier number as stored in the priority list.
    #[inline]
    pub const fn tier(self) -> i64 {
        self as i64
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            ShippingPriority::Express => "Express",
            ShippingPriority::Premium => "Premium",
            ShippingPriority::Standard => "Standard",
            ShippingPriority::Economy => "Economy",
        }
    }

    /// Promised delivery window.
    pub const fn sla(self) -> &'static str {
        match self {
            ShippingPriority::Express => "1 day",
            ShippingPriority::Premium => "2 days",
            ShippingPriority::Standard => "3-5 days",
            ShippingPriority::Economy => "7-10 days",
        }
    }

    /// Estimated warehouse processing time in minutes.
    pub const fn processing_minutes(self) -> u32 {
        match self {
            ShippingPriority::Express => 15,
            ShippingPriority::Premium => 25,
            ShippingPriority::Standard => 35,
            ShippingPriority::Economy => 45,
        }
    }
}

impl TryFrom<i64> for ShippingPriority {
    type Error = Error;

    fn try_from(tier: i64) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(ShippingPriority::Express),
            2 => Ok(ShippingPriority::Premium),
            3 => Ok(ShippingPriority::Standard),
            4 => Ok(ShippingPriority::Economy),
            other => Err(Error::InvalidPriority(other)),
        }
    }
}

impl fmt::Display for ShippingPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
