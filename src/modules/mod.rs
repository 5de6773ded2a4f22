pub mod catalog;
pub mod containers;
pub mod intake;
pub mod shipment_dates;
pub mod shipments;
