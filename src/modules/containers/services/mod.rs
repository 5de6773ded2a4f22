pub mod container_service;
pub mod distribution_validator;

pub use container_service::ContainerService;
