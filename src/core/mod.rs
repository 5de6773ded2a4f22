pub mod error;
pub mod sequence;

pub use error::{AppError, Result};
pub use sequence::{InMemorySequenceGenerator, SequenceGenerator};
