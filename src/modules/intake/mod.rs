pub mod models;
pub mod repositories;
pub mod services;

pub use models::{IntakeRecord, NewIntakeRecord};
pub use repositories::{InMemoryIntakeRepository, IntakeRepository};
pub use services::IntakeService;
