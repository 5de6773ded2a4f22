pub mod models;
pub mod repositories;

pub use models::{Article, ArticleType, Province};
pub use repositories::{
    ArticleRepository, InMemoryArticleRepository, InMemoryProvinceRepository, ProvinceRepository,
};
