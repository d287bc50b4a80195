use chrono::{DateTime, TimeZone, Utc};
use fulfillment::simulation::{self, ShiftSummary};
use fulfillment::SimulationConfig;
use sorted_list::{Kind, Scalar};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap()
}

fn run(shift_orders: usize) -> (ShiftSummary, String) {
    let config = SimulationConfig {
        shift_orders,
        ..SimulationConfig::default()
    };
    let mut out = Vec::new();
    let summary = simulation::run(&config, start(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn numbers(summary: &ShiftSummary) -> Vec<&str> {
    summary
        .processed
        .iter()
        .map(|order| order.order_number.as_str())
        .collect()
}

#[test]
fn morning_shift_serves_most_urgent_first() {
    let (summary, _) = run(4);

    assert_eq!(summary.accepted, 6);
    assert_eq!(numbers(&summary), ["SM1003", "SM1006", "SM1002", "SM1001"]);
    assert_eq!(summary.pending, 2);
    assert!(!summary.express_pending);

    assert_eq!(summary.tiers.kind, Some(Kind::Integer));
    assert_eq!(summary.tiers.size, 2);
    assert_eq!(
        summary.tiers.elements,
        vec![Scalar::Integer(3), Scalar::Integer(4)]
    );
}

#[test]
fn report_lines() {
    let (_, out) = run(4);

    assert!(out.starts_with("SIMULATION: Typical day\n"));
    assert!(out.contains("Priorities: 1=Express (SLA 1 day), 2=Premium (SLA 2 days)"));
    assert!(out.contains(
        "New order has been added: SM1003 [Express] - Corporate Client - Dr. Squatch \
         → Marina del Rey, CA | 100x Rugged & Ready 4-Pack, 20x Deodorant 6-Pack \
         | 15.5lb (Delivery: 20/10 10:00)"
    ));
    assert!(out.contains("TOTAL ORDERS: 6\nTOTAL WEIGHT: 34.5 pounds\nTOTAL ITEMS: 234\n"));
    assert!(out.contains("SLA RISK ORDERS:\n   SM1006 - Medical Supply Co\n\n"));
    assert!(!out.contains("   SM1003 - Corporate Client"));
    assert!(out.contains("Next order in line: SM1003\nPriority: 1 - Corporate Client - Dr. Squatch\n"));
    assert!(out.contains("Estimated time of processing: 15 minutes"));
    assert!(out.contains("We still have 2 pending orders for the 2nd shift\n"));
    assert!(!out.contains("ATTENTION!"));
}

#[test]
fn short_shift_leaves_express_for_later() {
    let (summary, out) = run(1);

    assert_eq!(numbers(&summary), ["SM1003"]);
    assert_eq!(summary.pending, 5);
    assert!(summary.express_pending);
    assert!(out.contains("ATTENTION! There are Express pending orders"));
}

#[test]
fn long_shift_drains_the_queue() {
    let (summary, out) = run(10);

    assert_eq!(
        numbers(&summary),
        ["SM1003", "SM1006", "SM1002", "SM1001", "SM1004", "SM1005"]
    );
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.tiers.elements, Vec::<Scalar>::new());
    assert!(out.contains("Stats after the morning shift:\nThe fulfillment queue is empty\n"));
    assert!(out.contains("All orders from the morning shift were processed!"));
}
