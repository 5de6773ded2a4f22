pub mod container_repository;

pub use container_repository::{
    ContainerRepository, DistributionRepository, InMemoryContainerRepository,
    InMemoryDistributionRepository,
};
