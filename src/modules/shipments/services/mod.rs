pub mod rates;
pub mod shipment_service;

pub use shipment_service::ShipmentService;
