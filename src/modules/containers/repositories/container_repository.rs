use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::containers::models::{Container, Distribution};
use crate::modules::containers::services::distribution_validator;

#[async_trait]
pub trait ContainerRepository: Send + Sync {
    async fn insert(&self, container: Container) -> Result<Container>;
    async fn update(&self, container: Container) -> Result<Container>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Container>>;
    async fn list(&self) -> Result<Vec<Container>>;
    async fn list_by_date(&self, shipment_date_id: &str) -> Result<Vec<Container>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait DistributionRepository: Send + Sync {
    /// Insert a distribution, running the cumulative-weight check against
    /// the current siblings atomically with the write. On violation the
    /// stored set is left unchanged.
    async fn insert_validated(
        &self,
        distribution: Distribution,
        billable_weight: Decimal,
    ) -> Result<Distribution>;

    /// Update a distribution under the same atomic check; the record being
    /// updated is excluded from the sibling sum.
    async fn update_validated(
        &self,
        distribution: Distribution,
        billable_weight: Decimal,
    ) -> Result<Distribution>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Distribution>>;
    async fn list_by_shipment(&self, shipment_id: &str) -> Result<Vec<Distribution>>;
    async fn list_by_container(&self, container_id: &str) -> Result<Vec<Distribution>>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn delete_by_shipment(&self, shipment_id: &str) -> Result<()>;
    async fn exists_for_container(&self, container_id: &str) -> Result<bool>;
}

pub struct InMemoryContainerRepository {
    records: RwLock<HashMap<String, Container>>,
}

impl InMemoryContainerRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryContainerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRepository for InMemoryContainerRepository {
    async fn insert(&self, container: Container) -> Result<Container> {
        let mut records = self.records.write().await;
        records.insert(container.id.clone(), container.clone());
        Ok(container)
    }

    async fn update(&self, container: Container) -> Result<Container> {
        let mut records = self.records.write().await;
        if !records.contains_key(&container.id) {
            return Err(AppError::not_found(format!("Container {}", container.id)));
        }
        records.insert(container.id.clone(), container.clone());
        Ok(container)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Container>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Container>> {
        let records = self.records.read().await;
        let mut containers: Vec<Container> = records.values().cloned().collect();
        containers.sort_by_key(|c| c.number);
        Ok(containers)
    }

    async fn list_by_date(&self, shipment_date_id: &str) -> Result<Vec<Container>> {
        let records = self.records.read().await;
        let mut containers: Vec<Container> = records
            .values()
            .filter(|c| c.shipment_date_id.as_deref() == Some(shipment_date_id))
            .cloned()
            .collect();
        containers.sort_by_key(|c| c.number);
        Ok(containers)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Container {}", id)))
    }
}

pub struct InMemoryDistributionRepository {
    records: RwLock<HashMap<String, Distribution>>,
}

impl InMemoryDistributionRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn sibling_total(
        records: &HashMap<String, Distribution>,
        shipment_id: &str,
        exclude_id: &str,
    ) -> Decimal {
        records
            .values()
            .filter(|d| d.shipment_id == shipment_id && d.id != exclude_id)
            .map(|d| d.weight)
            .sum()
    }
}

impl Default for InMemoryDistributionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DistributionRepository for InMemoryDistributionRepository {
    async fn insert_validated(
        &self,
        distribution: Distribution,
        billable_weight: Decimal,
    ) -> Result<Distribution> {
        // Check and insert under one write guard: two concurrent inserts for
        // the same shipment cannot both validate against a stale sum.
        let mut records = self.records.write().await;
        let sibling_total =
            Self::sibling_total(&records, &distribution.shipment_id, &distribution.id);
        distribution_validator::check_distribution(
            distribution.weight,
            sibling_total,
            billable_weight,
        )?;
        records.insert(distribution.id.clone(), distribution.clone());
        Ok(distribution)
    }

    async fn update_validated(
        &self,
        distribution: Distribution,
        billable_weight: Decimal,
    ) -> Result<Distribution> {
        let mut records = self.records.write().await;
        if !records.contains_key(&distribution.id) {
            return Err(AppError::not_found(format!(
                "Distribution {}",
                distribution.id
            )));
        }
        let sibling_total =
            Self::sibling_total(&records, &distribution.shipment_id, &distribution.id);
        distribution_validator::check_distribution(
            distribution.weight,
            sibling_total,
            billable_weight,
        )?;
        records.insert(distribution.id.clone(), distribution.clone());
        Ok(distribution)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Distribution>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list_by_shipment(&self, shipment_id: &str) -> Result<Vec<Distribution>> {
        let records = self.records.read().await;
        let mut distributions: Vec<Distribution> = records
            .values()
            .filter(|d| d.shipment_id == shipment_id)
            .cloned()
            .collect();
        distributions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(distributions)
    }

    async fn list_by_container(&self, container_id: &str) -> Result<Vec<Distribution>> {
        let records = self.records.read().await;
        let mut distributions: Vec<Distribution> = records
            .values()
            .filter(|d| d.container_id == container_id)
            .cloned()
            .collect();
        distributions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(distributions)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Distribution {}", id)))
    }

    async fn delete_by_shipment(&self, shipment_id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.retain(|_, d| d.shipment_id != shipment_id);
        Ok(())
    }

    async fn exists_for_container(&self, container_id: &str) -> Result<bool> {
        let records = self.records.read().await;
        Ok(records.values().any(|d| d.container_id == container_id))
    }
}
