// In-memory stores for the two reference tables. Both support soft
// deactivation only; catalog rows stay resolvable for records that already
// reference them.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::{Article, Province};

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: Article) -> Result<Article>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Article>>;
    async fn list_active(&self) -> Result<Vec<Article>>;
    async fn set_active(&self, id: &str, active: bool) -> Result<()>;
}

#[async_trait]
pub trait ProvinceRepository: Send + Sync {
    async fn insert(&self, province: Province) -> Result<Province>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Province>>;
    async fn list_active(&self) -> Result<Vec<Province>>;
    async fn set_active(&self, id: &str, active: bool) -> Result<()>;
}

pub struct InMemoryArticleRepository {
    records: RwLock<HashMap<String, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: Article) -> Result<Article> {
        let mut records = self.records.write().await;
        records.insert(article.id.clone(), article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Article>> {
        let records = self.records.read().await;
        let mut articles: Vec<Article> =
            records.values().filter(|a| a.active).cloned().collect();
        articles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(articles)
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<()> {
        let mut records = self.records.write().await;
        let article = records
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Article {}", id)))?;
        article.active = active;
        Ok(())
    }
}

pub struct InMemoryProvinceRepository {
    records: RwLock<HashMap<String, Province>>,
}

impl InMemoryProvinceRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProvinceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProvinceRepository for InMemoryProvinceRepository {
    async fn insert(&self, province: Province) -> Result<Province> {
        let mut records = self.records.write().await;
        records.insert(province.id.clone(), province.clone());
        Ok(province)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Province>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Province>> {
        let records = self.records.read().await;
        let mut provinces: Vec<Province> =
            records.values().filter(|p| p.active).cloned().collect();
        provinces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(provinces)
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<()> {
        let mut records = self.records.write().await;
        let province = records
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Province {}", id)))?;
        province.active = active;
        Ok(())
    }
}
