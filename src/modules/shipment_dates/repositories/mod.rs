pub mod shipment_date_repository;

pub use shipment_date_repository::{InMemoryShipmentDateRepository, ShipmentDateRepository};
