pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DateRollup, ShipmentDate};
pub use repositories::{InMemoryShipmentDateRepository, ShipmentDateRepository};
pub use services::RollupService;
