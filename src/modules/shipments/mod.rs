pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CustomerTier, LineItem, NewLineItem, NewShipment, PaymentMethod, Shipment};
pub use repositories::{InMemoryShipmentRepository, ShipmentRepository};
pub use services::ShipmentService;
