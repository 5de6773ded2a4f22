pub mod shipment_date;

pub use shipment_date::{DateRollup, ShipmentDate};
