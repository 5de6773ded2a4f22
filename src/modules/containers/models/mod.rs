pub mod container;
pub mod distribution;

pub use container::{Container, ContainerSummary, NewContainer};
pub use distribution::{Distribution, NewDistribution};
