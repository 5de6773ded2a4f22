use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::shipment_dates::models::ShipmentDate;

#[async_trait]
pub trait ShipmentDateRepository: Send + Sync {
    async fn insert(&self, date: ShipmentDate) -> Result<ShipmentDate>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ShipmentDate>>;
    async fn list(&self) -> Result<Vec<ShipmentDate>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

pub struct InMemoryShipmentDateRepository {
    records: RwLock<HashMap<String, ShipmentDate>>,
}

impl InMemoryShipmentDateRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryShipmentDateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShipmentDateRepository for InMemoryShipmentDateRepository {
    async fn insert(&self, date: ShipmentDate) -> Result<ShipmentDate> {
        let mut records = self.records.write().await;
        records.insert(date.id.clone(), date.clone());
        Ok(date)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShipmentDate>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ShipmentDate>> {
        let records = self.records.read().await;
        let mut dates: Vec<ShipmentDate> = records.values().cloned().collect();
        dates.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(dates)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Shipment date {}", id)))
    }
}
