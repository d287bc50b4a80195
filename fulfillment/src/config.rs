//! Command-line configuration for the shift simulation.

use clap::Parser;

/// Settings for `fulfillment-sim`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "fulfillment-sim",
    about = "Replays a morning shift of shipping orders through the fulfillment queue"
)]
pub struct SimulationConfig {
    /// Orders the morning shift processes before handing over.
    #[arg(long, default_value_t = 4, env = "FULFILLMENT_SHIFT_ORDERS")]
    pub shift_orders: usize,

    /// Pause between processed orders, in milliseconds.
    #[arg(long, default_value_t = 0, env = "FULFILLMENT_PACE_MS")]
    pub pace_ms: u64,

    /// Log filter, e.g. `info` or `fulfillment=debug,sorted_list=trace`.
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log: String,

    /// Print the remaining priority tiers as JSON at the end.
    #[arg(long)]
    pub json: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shift_orders: 4,
            pace_ms: 0,
            log: "info".to_owned(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let config = SimulationConfig::try_parse_from([
            "fulfillment-sim",
            "--shift-orders",
            "6",
            "--pace-ms",
            "250",
            "--log",
            "debug",
            "--json",
        ])
        .unwrap();

        assert_eq!(config.shift_orders, 6);
        assert_eq!(config.pace_ms, 250);
        assert_eq!(config.log, "debug");
        assert!(config.json);
    }

    #[test]
    fn rejects_non_numeric_limit() {
        assert!(SimulationConfig::try_parse_from(["fulfillment-sim", "--shift-orders", "many"]).is_err());
    }
}
