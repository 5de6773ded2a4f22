pub mod article;
pub mod province;

pub use article::{Article, ArticleType};
pub use province::Province;
