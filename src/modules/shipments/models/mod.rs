pub mod line_item;
pub mod shipment;

pub use line_item::{LineItem, NewLineItem};
pub use shipment::{CustomerTier, NewShipment, PaymentMethod, Shipment, ShipmentUpdate};
