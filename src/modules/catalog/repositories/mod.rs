pub mod catalog_repository;

pub use catalog_repository::{
    ArticleRepository, InMemoryArticleRepository, InMemoryProvinceRepository, ProvinceRepository,
};
