// Rollups over a shipment-date grouping: revenue split by payment method,
// child counts and the destination summary string.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shipledger::shipment_dates::models::shipment_date::{destination_summary, display_name};
use shipledger::shipment_dates::models::DateRollup;
use shipledger::shipments::models::{CustomerTier, NewShipment, PaymentMethod, Shipment};

fn shipment(label: Decimal, payment: Option<PaymentMethod>) -> Shipment {
    let mut shipment = Shipment::new(
        "SHP00001".to_string(),
        NewShipment {
            sender_name: "Maria Perez".to_string(),
            sender_phone: None,
            recipient_name: "Jose Perez".to_string(),
            recipient_phone: None,
            customer_tier: CustomerTier::Normal,
            province_id: Some("province-1".to_string()),
            scale_weight: Decimal::ZERO,
            label_weight: label,
            volumetric_weight: Decimal::ZERO,
            payment_method: payment,
            document_fee: Decimal::ZERO,
            shipment_date_id: None,
        },
        "admin",
    )
    .unwrap();
    shipment.recalculate_pricing(Some(true), Decimal::ZERO);
    shipment
}

fn payment(kind: u8) -> Option<PaymentMethod> {
    match kind % 3 {
        0 => Some(PaymentMethod::Cash),
        1 => Some(PaymentMethod::Transfer),
        _ => None,
    }
}

#[test]
fn test_empty_grouping_rolls_up_to_zero() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let rollup = DateRollup::compute(Some(date), &[], 0, &[]);

    assert_eq!(rollup.display_name, "Shipment 15-01-2026");
    assert_eq!(rollup.total_shipments, 0);
    assert_eq!(rollup.total_revenue, Decimal::ZERO);
    assert_eq!(rollup.destination_summary, "no shipments");
}

#[test]
fn test_unsettled_shipments_count_toward_total_only() {
    let shipments = vec![
        shipment(dec!(10), Some(PaymentMethod::Cash)), // 1550
        shipment(dec!(5), Some(PaymentMethod::Transfer)), // 800
        shipment(dec!(5), None),                       // 800, no bucket
    ];

    let rollup = DateRollup::compute(None, &shipments, 2, &[]);

    assert_eq!(rollup.total_shipments, 3);
    assert_eq!(rollup.total_containers, 2);
    assert_eq!(rollup.total_weight, dec!(20));
    assert_eq!(rollup.total_revenue, dec!(3150));
    assert_eq!(rollup.total_revenue_cash, dec!(1550));
    assert_eq!(rollup.total_revenue_transfer, dec!(800));
}

proptest! {
    #[test]
    fn test_revenue_buckets_partition_the_total(
        entries in proptest::collection::vec((1u32..=300u32, 0u8..3u8), 0..10)
    ) {
        let shipments: Vec<Shipment> = entries
            .iter()
            .map(|(tenths, kind)| shipment(Decimal::new(*tenths as i64, 1), payment(*kind)))
            .collect();

        let rollup = DateRollup::compute(None, &shipments, 0, &[]);

        let unsettled: Decimal = shipments
            .iter()
            .filter(|s| s.payment_method.is_none())
            .map(|s| s.grand_total)
            .sum();
        prop_assert_eq!(
            rollup.total_revenue,
            rollup.total_revenue_cash + rollup.total_revenue_transfer + unsettled
        );
    }
}

#[test]
fn test_rollup_serializes_for_reporting() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let rollup = DateRollup::compute(Some(date), &[shipment(dec!(10), None)], 1, &[]);

    let value = serde_json::to_value(&rollup).unwrap();
    assert_eq!(value["display_name"], "Shipment 15-01-2026");
    assert_eq!(value["total_shipments"], 1);
    assert_eq!(value["total_revenue"], "1550");
}

#[test]
fn test_display_name_formats() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    assert_eq!(display_name(Some(date)), "Shipment 02-03-2026");
    assert_eq!(display_name(None), "Unscheduled shipment");
}

#[test]
fn test_destination_summary_lists_up_to_three() {
    let names: Vec<String> = ["Granma", "Santiago de Cuba", "Granma", "Holguin"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        destination_summary(&names),
        "Granma, Holguin, Santiago de Cuba"
    );
}

#[test]
fn test_destination_summary_elides_beyond_three() {
    let names: Vec<String> = [
        "Pinar del Rio",
        "Artemisa",
        "Mayabeque",
        "Matanzas",
        "Villa Clara",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(
        destination_summary(&names),
        "Artemisa, Matanzas, Mayabeque... (+2)"
    );
}
