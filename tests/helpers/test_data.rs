use std::str::FromStr;

use rust_decimal::Decimal;

use shipledger::shipments::models::{CustomerTier, NewShipment};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A plain shipment request; tweak the returned struct for scenario details.
pub fn new_shipment(province_id: Option<&str>, tier: CustomerTier, label: &str) -> NewShipment {
    NewShipment {
        sender_name: "Maria Perez".to_string(),
        sender_phone: Some("+52 55 1234 5678".to_string()),
        recipient_name: "Jose Perez".to_string(),
        recipient_phone: Some("+53 5 234 5678".to_string()),
        customer_tier: tier,
        province_id: province_id.map(|id| id.to_string()),
        scale_weight: dec("9.7"),
        label_weight: dec(label),
        volumetric_weight: Decimal::ZERO,
        payment_method: None,
        document_fee: Decimal::ZERO,
        shipment_date_id: None,
    }
}
