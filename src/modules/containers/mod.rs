pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Container, ContainerSummary, Distribution, NewContainer, NewDistribution};
pub use repositories::{
    ContainerRepository, DistributionRepository, InMemoryContainerRepository,
    InMemoryDistributionRepository,
};
pub use services::ContainerService;
