pub mod intake_repository;

pub use intake_repository::{InMemoryIntakeRepository, IntakeRepository};
