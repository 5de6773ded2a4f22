pub mod shipment_repository;

pub use shipment_repository::{InMemoryShipmentRepository, ShipmentRepository};
