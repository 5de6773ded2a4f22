use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::intake::models::IntakeRecord;

#[async_trait]
pub trait IntakeRepository: Send + Sync {
    async fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord>;
    async fn update(&self, record: IntakeRecord) -> Result<IntakeRecord>;
    async fn find_by_id(&self, id: &str) -> Result<Option<IntakeRecord>>;
    async fn list(&self) -> Result<Vec<IntakeRecord>>;
}

pub struct InMemoryIntakeRepository {
    records: RwLock<HashMap<String, IntakeRecord>>,
}

impl InMemoryIntakeRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryIntakeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntakeRepository for InMemoryIntakeRepository {
    async fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord> {
        let mut records = self.records.write().await;
        if records.values().any(|r| r.number == record.number) {
            return Err(AppError::validation(format!(
                "Intake record number '{}' already exists",
                record.number
            )));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, record: IntakeRecord) -> Result<IntakeRecord> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(AppError::not_found(format!("Intake record {}", record.id)));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<IntakeRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<IntakeRecord>> {
        let records = self.records.read().await;
        let mut all: Vec<IntakeRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.received_on.cmp(&a.received_on).then(b.number.cmp(&a.number)));
        Ok(all)
    }
}
